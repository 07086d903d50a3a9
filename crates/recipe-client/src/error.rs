//! # Client Error Types
//!
//! Error types for configuration, transport and API operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │ NetworkFailure  │  │    ResponseError        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Network        │  │  Status (non-2xx)       │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  Decode (bad body)      │ │
//! │  │  ConfigLoad...  │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │   Validation    │  Draft rejected before any request was sent        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inside an [`crate::AsyncResource`] every error is flattened to its
//! `Display` string and stored in the resource's `Error` state; nothing
//! propagates past the resource.

use recipe_core::ValidationError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error type covering every failure of a recipe API call.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Base URL or request path does not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Network Failures
    // =========================================================================
    /// Request could not be sent or the response could not be received.
    #[error("Network failure: {0}")]
    Network(String),

    /// Request did not complete within the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// Server answered with a non-success status code.
    ///
    /// Displays as the reason phrase alone (`"Not Found"`) because that is
    /// the message a front end shows.
    #[error("{reason}")]
    Status { code: u16, reason: String },

    /// Response body could not be parsed.
    #[error("Invalid response body: {0}")]
    Decode(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Draft failed validation; nothing was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_builder() {
            ClientError::InvalidConfig(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Canonical reason phrase of `code`, or `HTTP <code>` when it has none.
pub(crate) fn reason_phrase(code: u16) -> String {
    reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {code}"))
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Builds a `Status` error from a status code, using the canonical
    /// reason phrase or `HTTP <code>` when there is none.
    pub fn from_status(code: u16) -> Self {
        ClientError::Status {
            code,
            reason: reason_phrase(code),
        }
    }

    /// True for failures to send or receive (the request may never have
    /// reached the server).
    pub fn is_network_error(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Timeout(_))
    }

    /// True when the server answered but the answer was unusable.
    pub fn is_response_error(&self) -> bool {
        matches!(self, ClientError::Status { .. } | ClientError::Decode(_))
    }

    /// True for `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { code: 404, .. })
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_is_reason_phrase() {
        assert_eq!(ClientError::from_status(404).to_string(), "Not Found");
        assert_eq!(
            ClientError::from_status(500).to_string(),
            "Internal Server Error"
        );
        assert_eq!(ClientError::from_status(599).to_string(), "HTTP 599");
    }

    #[test]
    fn test_categories() {
        assert!(ClientError::Network("refused".into()).is_network_error());
        assert!(ClientError::Timeout(10).is_network_error());
        assert!(ClientError::from_status(404).is_response_error());
        assert!(ClientError::from_status(404).is_not_found());
        assert!(ClientError::Decode("eof".into()).is_response_error());
        assert!(ClientError::InvalidUrl("x".into()).is_config_error());
        assert!(!ClientError::from_status(500).is_network_error());
    }

    #[test]
    fn test_validation_converts() {
        let err: ClientError = ValidationError::Required {
            field: "title".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Validation error: title is required");
    }
}
