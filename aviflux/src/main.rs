use std::process::ExitCode;

use aviflux::airports::{AirportClient, AirportClientConfig, AirportDirectory};
use aviflux::config::ServerConfig;
use aviflux::plans::PlanStore;
use aviflux::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    aviflux::logging::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let airports = match &config.airports_url {
        Some(url) => {
            let loaded = match AirportClient::new(AirportClientConfig::default().with_url(url)) {
                Ok(client) => AirportDirectory::fetch(&client).await,
                Err(e) => Err(e),
            };
            match loaded {
                Ok(directory) => directory,
                Err(e) => {
                    tracing::error!(%url, error = %e, "failed to load airport data");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => AirportDirectory::bundled(),
    };
    tracing::info!(count = airports.len().await, "airport directory ready");

    let state = AppState::new(PlanStore::new(&config.plans), airports);
    let app = create_router(state, &config.allowed_origins);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(addr = %config.bind_addr, "AviFlux API listening");
    tracing::info!("  GET  /api/health                - Health check");
    tracing::info!("  GET  /api/greet?name=           - Greeting");
    tracing::info!("  POST /api/echo                  - Echo a message");
    tracing::info!("  POST /api/flightpath            - Issue a flight plan");
    tracing::info!("  GET  /api/flightpath/{{plan_id}}  - Fetch an issued plan");
    tracing::info!("  POST /api/flightpath/summary/route - Leg distances for a route");
    tracing::info!("  GET  /api/airport/{{icao}}        - Airport details");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server stopped");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
