//! Error types for the Publisher Management client
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Variants are grouped by the layer that produces them so callers can match
//! on the failure kind instead of inspecting messages.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// One `(type, message)` pair from a structured API error body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    /// Error type reported by the service (e.g. "Unauthorized")
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.kind, self.message)
    }
}

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status_code}): {}", join_messages(.messages))]
    Api {
        status_code: u16,
        messages: Vec<ApiMessage>,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to decode record at index {index}: {message}")]
    RecordDecode { index: usize, message: String },

    #[error("Invalid pagination metadata: {message}")]
    InvalidPagination { message: String },

    // ============================================================================
    // Concurrency Errors
    // ============================================================================
    #[error("Page fetch task failed: {message}")]
    TaskFailed { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an API error from a status code and its messages
    pub fn api(status_code: u16, messages: Vec<ApiMessage>) -> Self {
        Self::Api {
            status_code,
            messages,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a record decode error for the record at `index`
    pub fn record_decode(index: usize, message: impl Into<String>) -> Self {
        Self::RecordDecode {
            index,
            message: message.into(),
        }
    }

    /// Create an invalid pagination error
    pub fn invalid_pagination(message: impl Into<String>) -> Self {
        Self::InvalidPagination {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error came from decoding a page or a record
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Error::Decode { .. } | Error::RecordDecode { .. } | Error::InvalidPagination { .. }
        )
    }
}

fn join_messages(messages: &[ApiMessage]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required config field: api_key");

        let err = Error::record_decode(3, "missing field `key`");
        assert_eq!(
            err.to_string(),
            "Failed to decode record at index 3: missing field `key`"
        );
    }

    #[test]
    fn test_api_error_joins_messages() {
        let err = Error::api(
            400,
            vec![
                ApiMessage::new("BadRequest", "page out of range"),
                ApiMessage::new("BadRequest", "limit too large"),
            ],
        );
        assert_eq!(
            err.to_string(),
            "API error (status 400): BadRequest, page out of range; BadRequest, limit too large"
        );
        assert_eq!(err.status_code(), Some(400));
    }

    #[test]
    fn test_api_message_deserialize() {
        let msg: ApiMessage =
            serde_json::from_str(r#"{"type":"Unauthorized","message":"invalid key"}"#).unwrap();
        assert_eq!(msg, ApiMessage::new("Unauthorized", "invalid key"));
    }

    #[test]
    fn test_is_decode() {
        assert!(Error::decode("bad").is_decode());
        assert!(Error::record_decode(0, "bad").is_decode());
        assert!(Error::invalid_pagination("negative").is_decode());
        assert!(!Error::api(500, vec![]).is_decode());
        assert!(!Error::config("x").is_decode());
    }

    #[test]
    fn test_status_code_absent_for_non_http() {
        assert_eq!(Error::decode("x").status_code(), None);
    }
}
