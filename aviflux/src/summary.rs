//! Great-circle distances along a route.
//!
//! Distances use the haversine formula on a spherical Earth. That is within
//! about 0.5% of the WGS84 geodesic, which is plenty for a route overview.

use serde::Serialize;

use crate::airports::Airport;
use crate::domain::{Icao, RouteQuery};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Kilometres in one nautical mile.
pub const KM_PER_NM: f64 = 1.852;

/// A route referenced an airport with no known position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Airport {0} not found")]
pub struct UnknownAirport(pub Icao);

/// One leg of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub origin: Icao,
    pub destination: Icao,
    pub distance_km: f64,
    pub distance_nm: f64,
}

/// Per-leg and total distances for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// The route as entered, without the closing leg.
    pub airports: Vec<Icao>,
    pub circular: bool,
    pub total_distance_km: f64,
    pub total_distance_nm: f64,
    pub segments: Vec<RouteSegment>,
}

/// Great-circle distance in kilometres between two points given in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Distances are reported to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarise `route`, resolving each code through `lookup`.
///
/// Legs join consecutive airports. With `circular`, a leg from the last
/// airport back to the first is appended unless the route already ends
/// where it started. Fails on the first code `lookup` does not know.
pub fn summarize<'a>(
    route: &RouteQuery,
    circular: bool,
    lookup: impl Fn(Icao) -> Option<&'a Airport>,
) -> Result<RouteSummary, UnknownAirport> {
    let airports = route
        .codes()
        .iter()
        .map(|&code| lookup(code).ok_or(UnknownAirport(code)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut legs: Vec<(&Airport, &Airport)> =
        airports.windows(2).map(|w| (w[0], w[1])).collect();
    if circular && route.origin() != route.destination() {
        legs.push((airports[airports.len() - 1], airports[0]));
    }

    let mut total_km = 0.0;
    let mut segments = Vec::with_capacity(legs.len());
    for (from, to) in legs {
        let km = haversine_km(from.latitude, from.longitude, to.latitude, to.longitude);
        total_km += km;
        segments.push(RouteSegment {
            origin: from.icao,
            destination: to.icao,
            distance_km: round2(km),
            distance_nm: round2(km / KM_PER_NM),
        });
    }

    Ok(RouteSummary {
        airports: route.codes().to_vec(),
        circular,
        total_distance_km: round2(total_km),
        total_distance_nm: round2(total_km / KM_PER_NM),
        segments,
    })
}
