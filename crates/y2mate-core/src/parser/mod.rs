//! JSON response parsers for Y2Mate
//!
//! Contains one module per endpoint response shape. Every parser first
//! checks the `mess` field shared by all responses, then deserializes the
//! endpoint schema and maps it into the domain types.

pub mod analyze;
pub mod convert;
pub mod search;

pub use analyze::parse_video_metadata;
pub use convert::parse_download_info;
pub use search::parse_search_results;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, Y2MateError};

/// Decodes a response body into an endpoint schema
///
/// A non-empty `mess` string wins over any schema mismatch, so a service
/// error is never reported as a parse error.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(message) = service_message(&value) {
        tracing::warn!(mess = message, "Y2Mate reported an error");
        return Err(Y2MateError::Service(message.to_string()));
    }

    Ok(serde_json::from_value(value)?)
}

fn service_message(value: &Value) -> Option<&str> {
    value
        .get("mess")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
}
