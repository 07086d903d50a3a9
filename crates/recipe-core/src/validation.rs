//! # Validation Module
//!
//! Form boundary validation for recipe drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end form                                                │
//! │  └── Typed RecipeDraft, one field per input                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Required fields, lengths, list sizes                              │
//! │  └── Returns trimmed values                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Server (external)                                             │
//! │  └── Schema checks on the document store                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each validator returns the trimmed value so callers can build a
//! normalized draft in one pass.

use crate::error::ValidationError;
use crate::{
    MAX_DESCRIPTION_LEN, MAX_ID_LEN, MAX_IMAGE_LEN, MAX_INGREDIENT_LEN, MAX_LIST_ENTRIES,
    MAX_STEP_LEN, MAX_TITLE_LEN,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn check_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Validates a recipe title.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use recipe_core::validation::validate_title;
///
/// assert_eq!(validate_title(" Toast ").unwrap(), "Toast");
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<String> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    check_len("title", title, MAX_TITLE_LEN)?;
    Ok(title.to_string())
}

/// Validates a recipe description. Empty is allowed.
pub fn validate_description(description: &str) -> ValidationResult<String> {
    let description = description.trim();
    check_len("description", description, MAX_DESCRIPTION_LEN)?;
    Ok(description.to_string())
}

/// Validates an image file name.
///
/// ## Rules
/// - Must not be blank
/// - At most 255 characters
/// - A bare file name: the image must already exist in the server's
///   static `img/` directory, so paths are rejected
///
/// ## Example
/// ```rust
/// use recipe_core::validation::validate_image;
///
/// assert!(validate_image("toast.png").is_ok());
/// assert!(validate_image("../etc/passwd").is_err());
/// assert!(validate_image("img/toast.png").is_err());
/// assert!(validate_image("toast..png").is_ok());
/// ```
pub fn validate_image(image: &str) -> ValidationResult<String> {
    let image = image.trim();

    if image.is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    check_len("image", image, MAX_IMAGE_LEN)?;

    if image.contains('/') || image.contains('\\') || is_dot_segment(image) {
        return Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: "must be a file name, not a path".to_string(),
        });
    }

    Ok(image.to_string())
}

// =============================================================================
// List Validators
// =============================================================================

fn validate_entries(field: &str, entries: &[String], max_len: usize) -> ValidationResult<Vec<String>> {
    if entries.len() > MAX_LIST_ENTRIES {
        return Err(ValidationError::TooMany {
            field: field.to_string(),
            max: MAX_LIST_ENTRIES,
        });
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(ValidationError::BlankEntry {
                    field: field.to_string(),
                    index: i + 1,
                });
            }
            check_len(field, entry, max_len)?;
            Ok(entry.to_string())
        })
        .collect()
}

/// Validates the ingredient list.
///
/// Any number of lines up to [`MAX_LIST_ENTRIES`]; order is preserved.
pub fn validate_ingredients(ingredients: &[String]) -> ValidationResult<Vec<String>> {
    validate_entries("ingredients", ingredients, MAX_INGREDIENT_LEN)
}

/// Validates the preparation steps.
pub fn validate_preparation(steps: &[String]) -> ValidationResult<Vec<String>> {
    validate_entries("preparation", steps, MAX_STEP_LEN)
}

// =============================================================================
// Id Validators
// =============================================================================

/// Validates a recipe id before it is placed in a request path.
///
/// Ids are opaque server values. Beyond blankness and length, only dot
/// segments (`.`, `..` and their `%2e` spellings) are refused, since URL
/// path normalization would collapse them into the collection path.
pub fn validate_recipe_id(id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    check_len("id", id, MAX_ID_LEN)?;

    if is_dot_segment(id) {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "cannot be a relative path segment".to_string(),
        });
    }

    Ok(id.to_string())
}

fn is_dot_segment(value: &str) -> bool {
    let decoded = value.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

// =============================================================================
// Unit Tests
// =============================================================================
