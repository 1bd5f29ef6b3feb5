// src/error.rs
//! Error types for the lookup clients.

use thiserror::Error;

/// Result type for lookup client operations.
pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Debug, Error)]
pub enum LookupError {
    /// Company resolution returned no candidates
    #[error("Company {0} not found")]
    NotFound(String),

    /// Connection failure, timeout or non-2xx status on a provider call
    #[error("Request to {endpoint} failed: {message}")]
    Transport {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    /// 2xx response whose body does not have the expected shape
    #[error("Invalid response format from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// Missing API key, invalid header value, HTTP client build failure
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LookupError {
    pub fn transport(endpoint: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            status,
            message: message.into(),
        }
    }

    pub fn malformed(endpoint: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}
