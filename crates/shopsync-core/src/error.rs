//! Error types for the sync pipeline.

use shopsync_types::ConfigError;
use thiserror::Error;

/// Errors that can occur during a sync run.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Server returned 429 Too Many Requests. Recovered locally by the
    /// backoff retrier; only surfaces past it when the budget is exhausted,
    /// at which point it is converted to [`SyncError::RequestFailed`].
    #[error("Rate limited (429): {body}")]
    RateLimited {
        /// Response payload, for diagnostics.
        body: String,
    },

    /// Server returned a non-2xx response.
    #[error("Request failed ({status}): {body}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Response payload.
        body: String,
    },

    /// Transport-level failure (connection, TLS, timeout).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
