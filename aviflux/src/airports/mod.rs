//! Airport reference data.
//!
//! Maps ICAO codes to airport names and coordinates. The table is either the
//! bundled subset of major airports or the OurAirports CSV fetched at
//! startup, filtered to medium and large airports.

mod client;
mod directory;
mod error;

pub use client::{AirportClient, AirportClientConfig, OURAIRPORTS_CSV_URL, parse_airports};
pub use directory::{Airport, AirportDirectory};
pub use error::AirportError;
