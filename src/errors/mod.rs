//! Error types for the cloud API clients.
//!
//! Two disjoint families live here: [`MarkerError`] for failures raised
//! without an HTTP response, and [`ClientException`] for failures classified
//! from one. [`RaxError`] unifies both for callers that want a single type.

mod client;
mod mapping;
mod markers;

pub use client::{ClientException, ClientExceptionBuilder, ClientExceptionKind, STATUS_TABLE};
pub use mapping::{classify, ErrorMapper};
pub use markers::MarkerError;

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type RaxResult<T> = Result<T, RaxError>;

/// Umbrella error over both families plus the ambient layers.
#[derive(Debug, Error)]
pub enum RaxError {
    /// An error classified from an HTTP response.
    #[error(transparent)]
    Client(#[from] ClientException),

    /// A payload-free failure signal.
    #[error(transparent)]
    Marker(#[from] MarkerError),

    /// Invalid classifier or logging configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Body could not be read or decoded.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },
}

impl RaxError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        RaxError::Configuration {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code when this error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RaxError::Client(e) => Some(e.code()),
            _ => None,
        }
    }

    /// Returns the server request ID when one was captured.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            RaxError::Client(e) => e.request_id(),
            _ => None,
        }
    }

    /// Returns true if this is the given client exception kind.
    pub fn is_client_kind(&self, kind: ClientExceptionKind) -> bool {
        matches!(self, RaxError::Client(e) if e.kind() == kind)
    }
}

impl From<serde_json::Error> for RaxError {
    fn from(err: serde_json::Error) -> Self {
        RaxError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for RaxError {
    fn from(err: reqwest::Error) -> Self {
        RaxError::Serialization {
            message: format!("Failed to read response body: {}", err),
        }
    }
}
