//! Route entry form controller.
//!
//! Owns the text the user typed and the state of one submission:
//!
//! ```text
//! Idle -> Validating -> Error
//!                    -> Submitting -> Error
//!                                  -> Navigated
//! ```
//!
//! `Error` behaves like `Idle` with a message attached: editing the input
//! clears it, and submitting again is allowed. `Navigated` is terminal.
//! There is no retry or cancellation transition.

use tokio::sync::watch;

use crate::domain::PlanReference;
use crate::submit::PlanService;
use crate::validate::{ValidationError, validate};

/// Why the last submission did not navigate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The input was rejected before any request was made.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The request was made and failed.
    #[error("could not create flight plan: {0}")]
    Submission(String),
}

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Error(FormError),
    Navigated(PlanReference),
}

impl FormState {
    /// Whether a request is outstanding (the submit control is disabled).
    pub fn is_loading(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    /// Whether no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FormState::Navigated(_))
    }
}

/// Controller for the ICAO route form.
#[derive(Debug)]
pub struct RouteForm<S> {
    service: S,
    input: String,
    state: watch::Sender<FormState>,
}

impl<S: PlanService> RouteForm<S> {
    /// Create an empty form that submits through `service`.
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(FormState::Idle);
        Self {
            service,
            input: String::new(),
            state,
        }
    }

    /// Replace the input text, upper-casing it as typed.
    ///
    /// Clears a previous error. Ignored once the form has navigated.
    pub fn set_input(&mut self, text: &str) {
        if self.state.borrow().is_terminal() {
            return;
        }
        self.input = text.to_uppercase();
        if matches!(*self.state.borrow(), FormState::Error(_)) {
            self.state.send_replace(FormState::Idle);
        }
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Watch state transitions as they happen.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Client-side route to navigate to, once a plan has been issued.
    pub fn navigation_target(&self) -> Option<String> {
        match &*self.state.borrow() {
            FormState::Navigated(plan) => Some(plan.navigation_target()),
            _ => None,
        }
    }

    /// Validate the input and, if it is valid, request a plan.
    ///
    /// Makes at most one request. Returns the state the form ends in,
    /// which is either `Error` or `Navigated`.
    pub async fn submit(&mut self) -> FormState {
        let current = self.state();
        if current.is_terminal() {
            return current;
        }

        self.state.send_replace(FormState::Validating);
        let route = match validate(&self.input) {
            Ok(route) => route,
            Err(e) => {
                tracing::debug!(input = %self.input, error = %e, "route input rejected");
                return self.finish(FormState::Error(e.into()));
            }
        };

        self.state.send_replace(FormState::Submitting);
        let next = match self.service.request_plan(&route).await {
            Ok(plan) => {
                tracing::info!(route = %route, plan = %plan, "navigating to plan");
                FormState::Navigated(plan)
            }
            Err(e) => {
                tracing::warn!(route = %route, error = %e, "route submission failed");
                FormState::Error(FormError::Submission(e.to_string()))
            }
        };
        self.finish(next)
    }

    fn finish(&mut self, state: FormState) -> FormState {
        self.state.send_replace(state.clone());
        state
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::Notify;

    use super::*;
    use crate::domain::RouteQuery;
    use crate::submit::{MockOutcome, MockPlanClient, SubmissionError};

    fn mock(outcome: MockOutcome) -> MockPlanClient {
        MockPlanClient::new(outcome).with_delay(Duration::ZERO)
    }

    #[test]
    fn starts_idle() {
        let form = RouteForm::new(mock(MockOutcome::Generated));
        assert_eq!(form.state(), FormState::Idle);
        assert!(!form.is_loading());
        assert_eq!(form.input(), "");
        assert_eq!(form.navigation_target(), None);
    }

    #[test]
    fn input_is_uppercased_as_typed() {
        let mut form = RouteForm::new(mock(MockOutcome::Generated));
        form.set_input("kjfk, kord");
        assert_eq!(form.input(), "KJFK, KORD");
    }

    #[tokio::test]
    async fn valid_route_navigates() {
        let client = mock(MockOutcome::Fixed("UUID-12345".into()));
        let mut form = RouteForm::new(client.clone());
        form.set_input("kjfk, kord, ksfo");

        let state = form.submit().await;

        assert_eq!(state, FormState::Navigated(PlanReference::new("UUID-12345")));
        assert_eq!(form.navigation_target().as_deref(), Some("/plan/UUID-12345"));
        assert!(!form.is_loading());
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test]
    async fn invalid_route_never_hits_the_network() {
        let client = mock(MockOutcome::Generated);
        let mut form = RouteForm::new(client.clone());
        form.set_input("KJF,KORD");

        let state = form.submit().await;

        assert!(matches!(
            state,
            FormState::Error(FormError::Validation(ValidationError::InvalidCode {
                position: 1,
                ..
            }))
        ));
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn empty_and_single_inputs_are_rejected() {
        let client = mock(MockOutcome::Generated);
        let mut form = RouteForm::new(client.clone());

        assert_eq!(
            form.submit().await,
            FormState::Error(FormError::Validation(ValidationError::Empty))
        );

        form.set_input("KJFK");
        assert_eq!(
            form.submit().await,
            FormState::Error(FormError::Validation(ValidationError::TooFewCodes { count: 1 }))
        );
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn submission_failure_returns_to_error_without_placeholder() {
        let client = mock(MockOutcome::Fail("502 Bad Gateway".into()));
        let mut form = RouteForm::new(client.clone());
        form.set_input("KJFK,KORD");

        let state = form.submit().await;

        match &state {
            FormState::Error(FormError::Submission(msg)) => {
                assert!(msg.contains("502 Bad Gateway"));
            }
            other => panic!("expected submission error, got {other:?}"),
        }
        assert!(!form.is_loading());
        assert_eq!(form.navigation_target(), None);
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test]
    async fn editing_clears_error_and_allows_resubmit() {
        let client = mock(MockOutcome::Fixed("plan-1".into()));
        let mut form = RouteForm::new(client.clone());
        form.set_input("KJFK");
        assert!(matches!(form.submit().await, FormState::Error(_)));

        form.set_input("KJFK,KORD");
        assert_eq!(form.state(), FormState::Idle);

        assert!(matches!(form.submit().await, FormState::Navigated(_)));
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test]
    async fn navigated_is_terminal() {
        let client = mock(MockOutcome::Fixed("plan-1".into()));
        let mut form = RouteForm::new(client.clone());
        form.set_input("KJFK,KORD");
        form.submit().await;

        form.set_input("EGLL");
        assert_eq!(form.input(), "KJFK,KORD");

        let again = form.submit().await;
        assert_eq!(again, FormState::Navigated(PlanReference::new("plan-1")));
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test]
    async fn loading_flag_is_set_only_while_submitting() {
        let gate = Arc::new(Notify::new());
        let service_gate = gate.clone();
        let service = move |_route: RouteQuery| {
            let gate = service_gate.clone();
            async move {
                gate.notified().await;
                Err::<PlanReference, _>(SubmissionError::Status {
                    status: 503,
                    body: String::new(),
                })
            }
        };

        let mut form = RouteForm::new(service);
        form.set_input("EGLL,EDDF");
        let mut rx = form.subscribe();

        let observer = async {
            let seen = rx.wait_for(FormState::is_loading).await.unwrap().clone();
            gate.notify_one();
            seen
        };

        let (final_state, seen) = tokio::join!(form.submit(), observer);

        assert_eq!(seen, FormState::Submitting);
        assert!(matches!(final_state, FormState::Error(FormError::Submission(_))));
        assert!(!form.is_loading());
        assert!(!rx.borrow().is_loading());
    }

    #[test]
    fn error_messages() {
        let err = FormError::from(ValidationError::TooFewCodes { count: 1 });
        assert_eq!(err.to_string(), "at least 2 ICAO codes are required, got 1");

        let err = FormError::Submission("timed out".into());
        assert_eq!(err.to_string(), "could not create flight plan: timed out");
    }
}
