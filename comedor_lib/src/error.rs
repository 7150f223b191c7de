//! Error types for the library layer.

use std::fmt;

use comedor_api::ApiError;

use crate::config::ConfigError;

/// Errors produced by the library layer, wrapping transport errors and adding
/// configuration and input validation failures.
#[derive(Debug)]
pub enum ComedorError {
    /// An error from the underlying REST client.
    Api(ApiError),
    /// Configuration could not be turned into a client.
    Config(ConfigError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for ComedorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error ({}): {}", e.status, e.message),
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ComedorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<ApiError> for ComedorError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

impl From<ConfigError> for ComedorError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
