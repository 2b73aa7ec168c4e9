//! AviFlux route planner.
//!
//! Validates comma-separated ICAO routes, submits them for a flight plan,
//! and serves the small JSON API that issues those plans along with
//! great-circle distances between the airports.

pub mod airports;
pub mod config;
pub mod domain;
pub mod form;
pub mod logging;
pub mod plans;
pub mod submit;
pub mod summary;
pub mod validate;
pub mod web;
