//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::airports::Airport;
use crate::domain::{Icao, PlanReference, RouteQuery};
use crate::plans::StoredPlan;
use crate::summary::RouteSummary;
use crate::validate::validate;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `allowed_origins` are the browser origins permitted by CORS.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/greet", get(greet))
        .route("/api/echo", post(echo))
        .route("/api/flightpath", post(create_flight_plan))
        .route("/api/flightpath/:plan_id", get(get_flight_plan))
        .route("/api/flightpath/summary/route", post(route_summary))
        .route("/api/airport/:icao", get(get_airport))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Root endpoint.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "AviFlux API is running".to_string(),
    })
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn greet(Query(req): Query<GreetRequest>) -> Json<GreetResponse> {
    let name = req.name.as_deref().unwrap_or("World");
    Json(GreetResponse {
        greeting: format!("Hello, {name}!"),
    })
}

async fn echo(body: Bytes) -> Result<Json<EchoResponse>, AppError> {
    let req: EchoRequest = parse_json(&body)?;
    Ok(Json(EchoResponse {
        you_sent: req.message,
    }))
}

/// Issue a flight plan for a comma-separated route.
///
/// The body is a JSON string such as `"KJFK,KORD"`. Codes are upper-cased
/// before validation.
async fn create_flight_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoredPlan>, AppError> {
    let raw: String = parse_json(&body)?;

    let route = validate(&raw.to_uppercase()).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let summary = match state.airports.summarize(&route, false).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::info!(route = %route, error = %e, "issuing plan without distances");
            None
        }
    };

    let plan = state.plans.issue(&route, summary).await;
    tracing::info!(plan_id = %plan.plan_id, route = %route, "issued flight plan");

    Ok(Json(StoredPlan::clone(&plan)))
}

/// Fetch a previously issued plan for the detail view.
async fn get_flight_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> Result<Json<StoredPlan>, AppError> {
    let reference = PlanReference::new(plan_id);
    let plan = state
        .plans
        .get(&reference)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("Flight plan {reference} not found or expired"),
        })?;

    Ok(Json(StoredPlan::clone(&plan)))
}

/// Great-circle legs and totals for an ordered list of airports.
async fn route_summary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteSummary>, AppError> {
    let req: RouteSummaryRequest = parse_json(&body)?;

    let codes = req
        .airports
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            Icao::parse_normalized(raw).map_err(|e| AppError::BadRequest {
                message: format!(
                    "{raw:?} (code {}) is not a valid ICAO code: {}",
                    i + 1,
                    e.reason()
                ),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let route = RouteQuery::new(codes).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let summary = state
        .airports
        .summarize(&route, req.circular)
        .await
        .map_err(|e| AppError::NotFound {
            message: e.to_string(),
        })?;

    tracing::info!(
        route = %route,
        circular = req.circular,
        total_km = summary.total_distance_km,
        "summarised route"
    );
    Ok(Json(summary))
}

/// Airport details by ICAO code.
async fn get_airport(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Airport>, AppError> {
    let icao = Icao::parse_normalized(&code).map_err(|e| AppError::BadRequest {
        message: format!("{code:?} is not a valid ICAO code: {}", e.reason()),
    })?;

    let airport = state
        .airports
        .get(icao)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("Airport with ICAO code {icao} not found"),
        })?;

    Ok(Json(airport))
}

/// Parse JSON manually so the body can be logged on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        let body = String::from_utf8_lossy(body);
        tracing::debug!(error = %e, %body, "invalid JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Application error type.
///
/// Handlers only fail on malformed or unknown input.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::info!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
