//! In-memory store of issued flight plans.
//!
//! Plans are kept just long enough for the detail view to fetch them after
//! a submission; entries expire after a TTL and the store is bounded.

use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use moka::future::Cache as MokaCache;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Icao, PlanReference, RouteQuery};
use crate::summary::RouteSummary;

/// Configuration for the plan store.
#[derive(Debug, Clone)]
pub struct PlanStoreConfig {
    /// How long an issued plan can be looked up.
    pub ttl: Duration,

    /// Maximum number of plans kept.
    pub max_capacity: u64,
}

impl Default for PlanStoreConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// A plan as issued by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredPlan {
    pub plan_id: String,
    pub icao_codes: Vec<Icao>,
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
    /// Leg distances, `null` when an airport on the route is not known.
    pub summary: Option<RouteSummary>,
}

/// Issues plan identifiers and remembers the route each was issued for.
pub struct PlanStore {
    plans: MokaCache<String, Arc<StoredPlan>>,
}

impl PlanStore {
    /// Create a new store with the given configuration.
    pub fn new(config: &PlanStoreConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { plans }
    }

    /// Issue a new plan for `route`.
    pub async fn issue(
        &self,
        route: &RouteQuery,
        summary: Option<RouteSummary>,
    ) -> Arc<StoredPlan> {
        let plan = Arc::new(StoredPlan {
            plan_id: Uuid::new_v4().to_string(),
            icao_codes: route.codes().to_vec(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            summary,
        });
        self.plans.insert(plan.plan_id.clone(), plan.clone()).await;
        plan
    }

    /// Look up a previously issued plan.
    pub async fn get(&self, plan: &PlanReference) -> Option<Arc<StoredPlan>> {
        self.plans.get(plan.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::AirportDirectory;
    use crate::validate::validate;

    #[tokio::test]
    async fn issued_plans_can_be_fetched() {
        let store = PlanStore::new(&PlanStoreConfig::default());
        let route = validate("KJFK,KORD,KSFO").unwrap();

        let issued = store.issue(&route, None).await;
        assert!(Uuid::parse_str(&issued.plan_id).is_ok());
        assert_eq!(issued.icao_codes, route.codes());
        assert!(chrono::DateTime::parse_from_rfc3339(&issued.generated_at).is_ok());

        let fetched = store
            .get(&PlanReference::new(issued.plan_id.clone()))
            .await
            .unwrap();
        assert_eq!(fetched, issued);
    }

    #[tokio::test]
    async fn every_submission_gets_a_new_plan() {
        let store = PlanStore::new(&PlanStoreConfig::default());
        let route = validate("EGLL,EDDF").unwrap();

        let a = store.issue(&route, None).await;
        let b = store.issue(&route, None).await;
        assert_ne!(a.plan_id, b.plan_id);
    }

    #[tokio::test]
    async fn unknown_plan_is_none() {
        let store = PlanStore::new(&PlanStoreConfig::default());
        assert!(store.get(&PlanReference::new("missing")).await.is_none());
    }

    #[tokio::test]
    async fn plans_expire() {
        let store = PlanStore::new(&PlanStoreConfig {
            ttl: Duration::from_millis(50),
            max_capacity: 10,
        });
        let issued = store.issue(&validate("EGLL,EDDF").unwrap(), None).await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(
            store
                .get(&PlanReference::new(issued.plan_id.clone()))
                .await
                .is_none()
        );
    }

    #[test]
    fn serializes_codes_as_strings() {
        let plan = StoredPlan {
            plan_id: "p".into(),
            icao_codes: validate("KJFK,KORD").unwrap().codes().to_vec(),
            generated_at: "2025-09-25T09:00:00Z".into(),
            summary: None,
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["icao_codes"], serde_json::json!(["KJFK", "KORD"]));
        assert!(json["summary"].is_null());
    }

    #[tokio::test]
    async fn issued_plan_keeps_its_summary() {
        let store = PlanStore::new(&PlanStoreConfig::default());
        let route = validate("KJFK,KLAX").unwrap();
        let summary = AirportDirectory::bundled()
            .summarize(&route, false)
            .await
            .unwrap();

        let issued = store.issue(&route, Some(summary.clone())).await;
        let fetched = store
            .get(&PlanReference::new(issued.plan_id.clone()))
            .await
            .unwrap();
        assert_eq!(fetched.summary, Some(summary));
    }
}
