//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Body of the root endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check result.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the server is answering
    pub status: String,
}

/// Query for the greeting endpoint.
#[derive(Debug, Deserialize)]
pub struct GreetRequest {
    /// Who to greet (defaults to "World")
    pub name: Option<String>,
}

/// Greeting result.
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetResponse {
    pub greeting: String,
}

/// Body of the echo endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct EchoRequest {
    pub message: String,
}

/// Echo result.
#[derive(Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub you_sent: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Body of the route summary endpoint.
#[derive(Debug, Deserialize)]
pub struct RouteSummaryRequest {
    /// Ordered ICAO codes, any case
    pub airports: Vec<String>,
    /// Add a closing leg back to the first airport
    #[serde(default)]
    pub circular: bool,
}
