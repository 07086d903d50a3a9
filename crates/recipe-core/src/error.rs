//! # Error Types
//!
//! Domain error types for recipe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  recipe-core errors (this file)                                        │
//! │  └── ValidationError  - Form input rejected at the boundary            │
//! │                                                                         │
//! │  recipe-client errors (separate crate)                                 │
//! │  └── ClientError      - Config, network and response failures          │
//! │                                                                         │
//! │  App errors                                                             │
//! │  └── AppError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → ClientError → AppError → stderr               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// Raised by [`crate::validation`] before a draft is sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. an image path instead of a file name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A list field has too many entries.
    #[error("{field} cannot have more than {max} entries")]
    TooMany { field: String, max: usize },

    /// One entry of a list field is blank.
    ///
    /// `index` is 1-based so it matches what the user sees in the form.
    #[error("{field} entry {index} is blank")]
    BlankEntry { field: String, index: usize },
}

impl ValidationError {
    /// Name of the form field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::TooMany { field, .. }
            | ValidationError::BlankEntry { field, .. } => field,
        }
    }
}
