//! # recipe-core: Pure Domain Types for Recipe Book
//!
//! This crate holds the domain model shared by every other crate in the
//! workspace. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Recipe Book Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front end (terminal / web)                      │   │
//! │  │     Recipe list ──► Recipe detail ──► Add recipe form           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            recipe-client (AsyncResource, RecipeApi)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ recipe-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌────────────┐                │   │
//! │  │   │   types   │  │   fetch    │  │ validation │                │   │
//! │  │   │  Recipe   │  │ FetchState │  │   rules    │                │   │
//! │  │   │  Draft    │  │ FetchStatus│  │   checks   │                │   │
//! │  │   └───────────┘  └────────────┘  └────────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Recipe, PreparationStep, RecipeDraft
//! - [`fetch`] - FetchState / FetchStatus (the async resource's state value)
//! - [`error`] - Validation error types
//! - [`validation`] - Form boundary validation
//!
//! ## Example Usage
//!
//! ```rust
//! use recipe_core::{FetchState, FetchStatus};
//!
//! let mut state = FetchState::success(vec!["Toast".to_string()]);
//! assert_eq!(state.status(), FetchStatus::Success);
//!
//! // Optimistic update keeps the status
//! assert!(state.replace_data(vec!["Toast".to_string(), "Eggs".to_string()]));
//! assert_eq!(state.status(), FetchStatus::Success);
//! assert!(state.error().is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fetch;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use fetch::{FetchState, FetchStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Image used by a fresh draft when the user has not picked one.
pub const DEFAULT_IMAGE: &str = "toast.png";

/// Maximum title length (characters).
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum description length (characters).
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Maximum image file name length (characters).
pub const MAX_IMAGE_LEN: usize = 255;

/// Maximum length of a single ingredient line (characters).
pub const MAX_INGREDIENT_LEN: usize = 200;

/// Maximum length of a single preparation step (characters).
pub const MAX_STEP_LEN: usize = 1000;

/// Maximum number of ingredients or preparation steps in one recipe.
pub const MAX_LIST_ENTRIES: usize = 100;

/// Maximum length of a recipe id.
///
/// Ids are opaque to the client (the server issues document ids), so only
/// an upper bound is enforced.
pub const MAX_ID_LEN: usize = 64;
