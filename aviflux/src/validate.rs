//! Route string validation.
//!
//! Turns the comma-separated text a user types into a [`RouteQuery`], or
//! explains what is wrong with it. Validation is case-sensitive: callers
//! that want lenient input upper-case it first (the form controller does
//! so as the user types).

use crate::domain::{Icao, MIN_ROUTE_LEN, RouteQuery};

/// Why a route string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Nothing but whitespace was entered.
    #[error("please enter at least {} ICAO codes separated by commas", MIN_ROUTE_LEN)]
    Empty,

    /// A token is not a 4-letter uppercase code.
    #[error("\"{token}\" (code {position}) is not a valid ICAO code: {reason}")]
    InvalidCode {
        /// 1-based position of the token in the input.
        position: usize,
        token: String,
        reason: &'static str,
    },

    /// Every code is valid but there are not enough of them.
    #[error("at least {} ICAO codes are required, got {count}", MIN_ROUTE_LEN)]
    TooFewCodes { count: usize },
}

/// Validate a raw route string.
///
/// The input is trimmed and split on commas, and each token is trimmed.
/// It is valid when there are at least two tokens and every token is
/// exactly four uppercase ASCII letters.
///
/// # Examples
///
/// ```
/// use aviflux::validate::{validate, ValidationError};
///
/// let route = validate("KJFK, KORD, KSFO").unwrap();
/// assert_eq!(route.request_body(), "KJFK,KORD,KSFO");
///
/// assert_eq!(validate("KJFK"), Err(ValidationError::TooFewCodes { count: 1 }));
/// assert!(validate("kjfk, kord").is_err());
/// ```
pub fn validate(raw: &str) -> Result<RouteQuery, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let codes = trimmed
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, token)| {
            Icao::parse(token).map_err(|e| ValidationError::InvalidCode {
                position: i + 1,
                token: token.to_string(),
                reason: e.reason(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    RouteQuery::new(codes).map_err(|e| ValidationError::TooFewCodes { count: e.count })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &str) -> Vec<String> {
        validate(raw)
            .unwrap()
            .codes()
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn accepts_spaced_list() {
        assert_eq!(codes("KJFK, KORD, KSFO"), vec!["KJFK", "KORD", "KSFO"]);
    }

    #[test]
    fn accepts_surrounding_whitespace() {
        assert_eq!(codes("  KJFK ,KORD\t\n"), vec!["KJFK", "KORD"]);
        assert_eq!(codes("EGLL,EDDF,RJTT,KLAX"), vec!["EGLL", "EDDF", "RJTT", "KLAX"]);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(validate(""), Err(ValidationError::Empty));
        assert_eq!(validate("   \t"), Err(ValidationError::Empty));
    }

    #[test]
    fn rejects_single_code() {
        assert_eq!(
            validate("KJFK"),
            Err(ValidationError::TooFewCodes { count: 1 })
        );
    }

    #[test]
    fn rejects_lowercase() {
        let err = validate("kjfk, kord").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCode {
                position: 1,
                token: "kjfk".into(),
                reason: "must be uppercase ASCII letters A-Z",
            }
        );
    }

    #[test]
    fn reports_short_token() {
        let err = validate("KJF,KORD").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCode {
                position: 1,
                token: "KJF".into(),
                reason: "must be exactly 4 characters",
            }
        );
        assert_eq!(
            err.to_string(),
            "\"KJF\" (code 1) is not a valid ICAO code: must be exactly 4 characters"
        );
    }

    #[test]
    fn reports_first_failing_token() {
        let err = validate("KJFK, KORD, K1SF, ab").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidCode { position: 3, ref token, .. } if token == "K1SF"
        ));
    }

    #[test]
    fn empty_tokens_are_invalid() {
        assert!(matches!(
            validate("KJFK,,KORD"),
            Err(ValidationError::InvalidCode { position: 2, .. })
        ));
        assert!(matches!(
            validate("KJFK,KORD,"),
            Err(ValidationError::InvalidCode { position: 3, .. })
        ));
        assert!(matches!(
            validate(",KJFK"),
            Err(ValidationError::InvalidCode { position: 1, .. })
        ));
    }

    #[test]
    fn other_separators_are_not_split() {
        assert!(matches!(
            validate("KJFK KORD"),
            Err(ValidationError::InvalidCode { position: 1, .. })
        ));
        assert!(validate("KJFK;KORD").is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "please enter at least 2 ICAO codes separated by commas"
        );
        assert_eq!(
            ValidationError::TooFewCodes { count: 1 }.to_string(),
            "at least 2 ICAO codes are required, got 1"
        );
    }
}
