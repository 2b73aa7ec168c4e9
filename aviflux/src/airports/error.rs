//! Airport data error types.

/// Errors that can occur when loading airport data.
#[derive(Debug, thiserror::Error)]
pub enum AirportError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The data source answered with an error status
    #[error("airport data request failed with status {status}")]
    Status { status: u16 },

    /// The CSV contained no usable airports
    #[error("no medium or large airports found in {url}")]
    Empty { url: String },
}
