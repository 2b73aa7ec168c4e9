//! Web layer for the route planner.
//!
//! Provides the JSON API: demo endpoints, health, and flight plan issue
//! and lookup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
