//! Error types for the RupeeRush contest pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the contest pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data error (upstream payload could not be read).
    #[error("Data error: {0}")]
    Data(String),

    /// Transport-level HTTP failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Upstream answered with a non-success status code.
    #[error("API request failed with status {0}")]
    UpstreamStatus(u16),

    /// Request did not complete within the configured timeout.
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }

    /// Create an HTTP transport error.
    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }
}
