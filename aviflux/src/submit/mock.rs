//! Mock plan service for working without a backend.
//!
//! Resolves after a fixed delay, like a slow network call, with either a
//! configured identifier, a freshly generated one, or a failure.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use uuid::Uuid;

use crate::domain::{PlanReference, RouteQuery};

use super::PlanService;
use super::error::SubmissionError;

/// Default simulated latency.
const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// What the mock answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// Always return this identifier.
    Fixed(String),
    /// Generate a new UUID for every request.
    Generated,
    /// Always fail with this message.
    Fail(String),
}

/// Mock plan service.
///
/// Clones share the request counter.
#[derive(Debug, Clone)]
pub struct MockPlanClient {
    outcome: MockOutcome,
    delay: Duration,
    requests: Arc<AtomicUsize>,
}

impl MockPlanClient {
    /// Create a mock with the given outcome and the default delay.
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            delay: DEFAULT_DELAY,
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of requests served so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl PlanService for MockPlanClient {
    async fn request_plan(&self, route: &RouteQuery) -> Result<PlanReference, SubmissionError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            route = %route,
            delay_ms = self.delay.as_millis() as u64,
            "mock plan request"
        );

        tokio::time::sleep(self.delay).await;

        match &self.outcome {
            MockOutcome::Fixed(id) => Ok(PlanReference::new(id.clone())),
            MockOutcome::Generated => Ok(PlanReference::new(Uuid::new_v4().to_string())),
            MockOutcome::Fail(message) => Err(SubmissionError::Unavailable(message.clone())),
        }
    }
}
