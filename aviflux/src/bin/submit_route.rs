//! Submit a route to a running AviFlux server from the command line.
//!
//! Usage: `submit_route "KJFK, KORD, KSFO"`
//!
//! Set `AVIFLUX_MOCK=1` to answer from the offline mock instead.

use std::process::ExitCode;
use std::time::Duration;

use aviflux::form::{FormState, RouteForm};
use aviflux::submit::{
    HttpPlanClient, MockOutcome, MockPlanClient, PlanClientConfig, PlanService,
};

#[tokio::main]
async fn main() -> ExitCode {
    aviflux::logging::init();

    let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    if std::env::var("AVIFLUX_MOCK").is_ok_and(|v| v == "1") {
        let mock =
            MockPlanClient::new(MockOutcome::Generated).with_delay(Duration::from_millis(500));
        return run(mock, &input).await;
    }

    let config = PlanClientConfig::from_env();
    match HttpPlanClient::new(config) {
        Ok(client) => run(client, &input).await,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run<S: PlanService>(service: S, input: &str) -> ExitCode {
    let mut form = RouteForm::new(service);
    form.set_input(input);

    match form.submit().await {
        FormState::Navigated(plan) => {
            println!("{}", plan.navigation_target());
            ExitCode::SUCCESS
        }
        FormState::Error(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
        other => {
            eprintln!("error: submission ended in unexpected state {other:?}");
            ExitCode::FAILURE
        }
    }
}
