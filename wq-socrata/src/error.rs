/// Error types for the Socrata water quality client
use thiserror::Error;

/// Main error type for fetching and decoding water quality records
#[derive(Error, Debug)]
pub enum SocrataError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Browser fetch failed before a response arrived
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Response body was not valid JSON
    #[error("Failed to parse response body: {0}")]
    ResponseParse(#[from] serde_json::Error),

    /// Response was JSON but not an array of records
    #[error("Unexpected response: {0}")]
    UnexpectedShape(String),
}

/// Type alias for Results using SocrataError
pub type Result<T> = std::result::Result<T, SocrataError>;
