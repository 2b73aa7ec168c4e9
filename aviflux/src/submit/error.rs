//! Submission error types.

use std::fmt;

/// Errors from submitting a route for planning.
#[derive(Debug)]
pub enum SubmissionError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Backend answered with a non-success status code
    Status { status: u16, body: String },

    /// Response body was not a plan reference
    Json {
        message: String,
        body: Option<String>,
    },

    /// Client could not be built from its configuration
    InvalidConfig(String),

    /// Planning backend is not reachable (mock or offline mode)
    Unavailable(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Http(e) => write!(f, "request failed: {e}"),
            SubmissionError::Status { status, body } => {
                write!(f, "flight plan request failed with status {status}")?;
                if !body.is_empty() {
                    write!(f, ": {body}")?;
                }
                Ok(())
            }
            SubmissionError::Json { message, body } => {
                write!(f, "unexpected response: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            SubmissionError::InvalidConfig(msg) => write!(f, "invalid client configuration: {msg}"),
            SubmissionError::Unavailable(msg) => write!(f, "planning service unavailable: {msg}"),
        }
    }
}

impl std::error::Error for SubmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmissionError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Http(err)
    }
}
