//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading run configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Required environment variable is absent or empty.
    #[error("Missing required environment variable: {name}")]
    MissingVar {
        /// Name of the variable.
        name: String,
    },
}
