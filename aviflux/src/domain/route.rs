//! Route query and plan reference value objects.

use std::fmt;

use super::Icao;

/// Minimum number of airports in a route.
pub const MIN_ROUTE_LEN: usize = 2;

/// Error returned when building a route from too few airports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a route needs at least {} airports, got {count}", MIN_ROUTE_LEN)]
pub struct RouteTooShort {
    pub count: usize,
}

/// An ordered list of airports the user wants a flight plan for.
///
/// Holds at least [`MIN_ROUTE_LEN`] codes, each valid by construction.
///
/// # Examples
///
/// ```
/// use aviflux::domain::{Icao, RouteQuery};
///
/// let route = RouteQuery::new(vec![
///     Icao::parse("KJFK").unwrap(),
///     Icao::parse("KORD").unwrap(),
/// ])
/// .unwrap();
/// assert_eq!(route.request_body(), "KJFK,KORD");
///
/// assert!(RouteQuery::new(vec![Icao::parse("KJFK").unwrap()]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    codes: Vec<Icao>,
}

impl RouteQuery {
    /// Build a route from an ordered list of codes.
    pub fn new(codes: Vec<Icao>) -> Result<Self, RouteTooShort> {
        if codes.len() < MIN_ROUTE_LEN {
            return Err(RouteTooShort { count: codes.len() });
        }
        Ok(Self { codes })
    }

    /// The codes in travel order.
    pub fn codes(&self) -> &[Icao] {
        &self.codes
    }

    /// Departure airport.
    pub fn origin(&self) -> Icao {
        self.codes[0]
    }

    /// Final arrival airport.
    pub fn destination(&self) -> Icao {
        self.codes[self.codes.len() - 1]
    }

    /// Number of airports in the route.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a constructed route.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The comma-joined string sent to the backend.
    pub fn request_body(&self) -> String {
        self.codes
            .iter()
            .map(Icao::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for code in &self.codes {
            if !first {
                f.write_str(" -> ")?;
            }
            f.write_str(code.as_str())?;
            first = false;
        }
        Ok(())
    }
}

/// Opaque identifier the backend assigns to a generated flight plan.
///
/// No structure is assumed; it is only used to look the plan up again and
/// to build the detail-view navigation target.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PlanReference(String);

impl PlanReference {
    /// Wrap a backend-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the reference and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Client-side route of the plan detail view.
    pub fn navigation_target(&self) -> String {
        format!("/plan/{}", self.0)
    }
}

impl fmt::Debug for PlanReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlanReference({})", self.0)
    }
}

impl fmt::Display for PlanReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
