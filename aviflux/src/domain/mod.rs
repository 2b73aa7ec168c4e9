//! Domain types for the route planner.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod icao;
mod route;

pub use icao::{Icao, InvalidIcao};
pub use route::{MIN_ROUTE_LEN, PlanReference, RouteQuery, RouteTooShort};
