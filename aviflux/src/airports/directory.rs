//! ICAO code to airport lookup.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::{Icao, RouteQuery};
use crate::summary::{RouteSummary, UnknownAirport, summarize};

use super::client::{AirportClient, parse_airports};
use super::error::AirportError;

/// Major airports shipped with the binary, in OurAirports column layout.
const BUNDLED_CSV: &str = include_str!("../../data/airports.csv");

/// An airport with its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub icao: Icao,
    pub name: String,
    /// Decimal degrees, north positive
    pub latitude: f64,
    /// Decimal degrees, east positive
    pub longitude: f64,
    /// OurAirports type, e.g. `large_airport`
    #[serde(rename = "type")]
    pub kind: String,
    /// ISO 3166-1 alpha-2 country code, empty when unknown
    pub country: String,
}

/// Thread-safe airport lookup.
#[derive(Clone)]
pub struct AirportDirectory {
    inner: Arc<RwLock<HashMap<Icao, Airport>>>,
}

impl AirportDirectory {
    /// Directory of the bundled major airports.
    pub fn bundled() -> Self {
        Self::from_airports(parse_airports(BUNDLED_CSV.as_bytes()))
    }

    /// Build a directory from already-parsed airports. Later duplicates win.
    pub fn from_airports(airports: impl IntoIterator<Item = Airport>) -> Self {
        let map = airports.into_iter().map(|a| (a.icao, a)).collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Download the full airport table.
    pub async fn fetch(client: &AirportClient) -> Result<Self, AirportError> {
        let airports = client.fetch_all().await?;
        Ok(Self::from_airports(airports))
    }

    /// Look up an airport by ICAO code.
    pub async fn get(&self, icao: Icao) -> Option<Airport> {
        let guard = self.inner.read().await;
        guard.get(&icao).cloned()
    }

    /// Number of airports known.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Great-circle legs and totals for `route`.
    ///
    /// With `circular`, a closing leg back to the origin is added.
    pub async fn summarize(
        &self,
        route: &RouteQuery,
        circular: bool,
    ) -> Result<RouteSummary, UnknownAirport> {
        let guard = self.inner.read().await;
        summarize(route, circular, |icao| guard.get(&icao))
    }
}
