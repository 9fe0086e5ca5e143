//! Error types for the Y2Mate client
//!
//! Separates transport failures, service-reported errors and malformed
//! responses so callers can tell them apart.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all Y2Mate client operations
///
/// Implements Display for human-readable messages and Serialize
/// (as the display string) for forwarding across serialization boundaries.
#[derive(Error, Debug)]
pub enum Y2MateError {
    /// HTTP request failed (network, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Service reported an error through the `mess` field
    #[error("Y2Mate error: {0}")]
    Service(String),

    /// Response body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl Y2MateError {
    /// The message reported by the service, if this is a service error
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Y2MateError::Service(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Y2MateError {
    fn from(error: serde_json::Error) -> Self {
        Y2MateError::ParseError(error.to_string())
    }
}

impl Serialize for Y2MateError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Y2Mate operations
pub type Result<T> = std::result::Result<T, Y2MateError>;
