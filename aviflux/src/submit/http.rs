//! HTTP client for the flight-path endpoint.
//!
//! Posts the comma-joined route as a JSON string to `/api/flightpath` and
//! reads the plan identifier out of the response.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::{PlanReference, RouteQuery};

use super::PlanService;
use super::error::SubmissionError;

/// Default base URL of the backend.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the plan-issuing endpoint.
const FLIGHTPATH_PATH: &str = "/api/flightpath";

/// Configuration for the plan client.
#[derive(Debug, Clone)]
pub struct PlanClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PlanClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PlanClientConfig {
    /// Read `AVIFLUX_API_URL` and `AVIFLUX_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("AVIFLUX_API_URL") {
            config = config.with_base_url(url);
        }
        if let Some(secs) = std::env::var("AVIFLUX_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config = config.with_timeout(secs);
        }
        config
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Body of a successful flight-path response. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct PlanResponse {
    plan_id: String,
}

/// Flight-path API client.
#[derive(Debug, Clone)]
pub struct HttpPlanClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPlanClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PlanClientConfig) -> Result<Self, SubmissionError> {
        let base_url = config.base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SubmissionError::InvalidConfig(format!(
                "base URL must be http(s): {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{base_url}{FLIGHTPATH_PATH}"),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a route and return the plan the backend issued.
    pub async fn submit(&self, route: &RouteQuery) -> Result<PlanReference, SubmissionError> {
        let body = route.request_body();
        tracing::debug!(endpoint = %self.endpoint, route = %body, "submitting route");

        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "flight plan request rejected");
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;

        let parsed: PlanResponse =
            serde_json::from_str(&text).map_err(|e| SubmissionError::Json {
                message: e.to_string(),
                body: Some(text.chars().take(500).collect()),
            })?;

        tracing::info!(plan_id = %parsed.plan_id, "flight plan issued");
        Ok(PlanReference::new(parsed.plan_id))
    }
}

impl PlanService for HttpPlanClient {
    async fn request_plan(&self, route: &RouteQuery) -> Result<PlanReference, SubmissionError> {
        self.submit(route).await
    }
}
