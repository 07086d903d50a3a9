//! # App Error Type
//!
//! Unified error type for recipe book commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Recipe Book                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, AppError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Draft invalid? ─── ValidationError ───────────────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  API call failed? ─── ClientError ──────────────► AppError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  main(): prints "error: <message>" to stderr, exits non-zero            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read failures never get here: they stay inside the resource and are
//! rendered as `Error: <message>` by the views.

use recipe_client::ClientError;
use recipe_core::ValidationError;

/// Result type alias for commands.
pub type AppResult<T> = Result<T, AppError>;

/// Error returned from commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Recipe does not exist (404)
    NotFound,

    /// Draft or id rejected before sending
    ValidationError,

    /// API unreachable or timed out
    NetworkError,

    /// API answered with an error status or an unreadable body
    ResponseError,

    /// Bad config file, environment or --api-url
    ConfigError,

    /// Add/delete attempted without --login
    NotLoggedIn,

    /// Output could not be written
    Internal,
}

impl ErrorCode {
    /// Process exit code for this error.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::ValidationError | ErrorCode::NotLoggedIn | ErrorCode::ConfigError => 2,
            _ => 1,
        }
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    pub fn not_logged_in(action: &str) -> Self {
        AppError::new(
            ErrorCode::NotLoggedIn,
            format!("Log in to {} recipes (pass --login)", action),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts client errors to app errors.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        if let ClientError::Validation(invalid) = err {
            return AppError::from(invalid);
        }

        let code = match &err {
            e if e.is_not_found() => ErrorCode::NotFound,
            e if e.is_network_error() => ErrorCode::NetworkError,
            e if e.is_response_error() => ErrorCode::ResponseError,
            e if e.is_config_error() => ErrorCode::ConfigError,
            _ => ErrorCode::Internal,
        };
        AppError::new(code, err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Failed to write output: {}", err);
        AppError::internal(format!("Failed to write output: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}
