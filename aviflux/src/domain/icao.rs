//! Airport code types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid ICAO code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ICAO code: {reason}")]
pub struct InvalidIcao {
    reason: &'static str,
}

impl InvalidIcao {
    /// Why the code was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// An ICAO airport location indicator such as `KJFK` or `EGLL`.
///
/// The first letter names the region (`K` for the contiguous United States,
/// `E` for northern Europe), the rest the country and aerodrome. Stored as
/// four bytes, each an uppercase ASCII letter. [`Icao::parse`] and
/// [`Icao::parse_normalized`] are the only constructors.
///
/// # Examples
///
/// ```
/// use aviflux::domain::Icao;
///
/// let heathrow = Icao::parse("EGLL").unwrap();
/// assert_eq!(heathrow.to_string(), "EGLL");
///
/// // IATA codes and mixed case are not ICAO indicators.
/// assert!(Icao::parse("LHR").is_err());
/// assert!(Icao::parse("Egll").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Icao([u8; 4]);

impl Icao {
    /// Strict parse: four uppercase ASCII letters, nothing else.
    ///
    /// The reason names the first rule broken, checked in the order empty,
    /// length, letters.
    pub fn parse(s: &str) -> Result<Self, InvalidIcao> {
        let bytes = s.as_bytes();

        if bytes.is_empty() {
            return Err(InvalidIcao {
                reason: "must not be empty",
            });
        }

        if bytes.len() != 4 {
            return Err(InvalidIcao {
                reason: "must be exactly 4 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIcao {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Icao([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Parse an ICAO code after trimming whitespace and upper-casing.
    ///
    /// ```
    /// use aviflux::domain::Icao;
    ///
    /// assert_eq!(Icao::parse_normalized(" egll ").unwrap().as_str(), "EGLL");
    /// ```
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidIcao> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the ICAO code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Icao({})", self.as_str())
    }
}

impl fmt::Display for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Icao {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
