//! Route submission.
//!
//! A validated [`RouteQuery`] is turned into a [`PlanReference`] by a
//! [`PlanService`]. The HTTP client talks to the backend; the mock serves a
//! fixed answer after a delay for offline use and tests. Any
//! `Fn(RouteQuery) -> Future` closure is also a service.
//!
//! Each call issues exactly one request. Failures are returned as
//! [`SubmissionError`] and never replaced with a placeholder plan.

mod error;
mod http;
mod mock;

use std::future::Future;

pub use error::SubmissionError;
pub use http::{HttpPlanClient, PlanClientConfig};
pub use mock::{MockOutcome, MockPlanClient};

use crate::domain::{PlanReference, RouteQuery};

/// Something that can issue a flight plan for a route.
pub trait PlanService: Send + Sync {
    /// Request a plan for `route`, resolving to the backend's identifier.
    fn request_plan(
        &self,
        route: &RouteQuery,
    ) -> impl Future<Output = Result<PlanReference, SubmissionError>> + Send;
}

impl<F, Fut> PlanService for F
where
    F: Fn(RouteQuery) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PlanReference, SubmissionError>> + Send,
{
    fn request_plan(
        &self,
        route: &RouteQuery,
    ) -> impl Future<Output = Result<PlanReference, SubmissionError>> + Send {
        self(route.clone())
    }
}
