//! # Domain Types
//!
//! Recipe types exchanged with the recipe REST API.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │      Recipe         │          │    RecipeDraft      │              │
//! │  │  ─────────────────  │          │  ─────────────────  │              │
//! │  │  _id (server id)    │ ◄─POST── │  title              │              │
//! │  │  title              │          │  description        │              │
//! │  │  description        │          │  image              │              │
//! │  │  image              │          │  ingredients[]      │              │
//! │  │  ingredients[]      │          │  preparation[]      │              │
//! │  │  preparation[]      │          └─────────────────────┘              │
//! │  └─────────────────────┘                                                │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  ┌─────────────────────┐                                                │
//! │  │  PreparationStep    │                                                │
//! │  │  { step }           │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The server stores recipes as documents, so the id field is `_id`:
//! ```json
//! {
//!   "_id": "1",
//!   "title": "Toast",
//!   "description": "Bread, but better",
//!   "image": "toast.png",
//!   "ingredients": ["bread", "butter"],
//!   "preparation": [{ "step": "Toast the bread" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{
    validate_description, validate_image, validate_ingredients, validate_preparation,
    validate_title, ValidationResult,
};
use crate::DEFAULT_IMAGE;

// =============================================================================
// Preparation Step
// =============================================================================

/// One step of a recipe's preparation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PreparationStep {
    pub step: String,
}

impl PreparationStep {
    pub fn new(step: impl Into<String>) -> Self {
        PreparationStep { step: step.into() }
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// A recipe as served by `GET /api/recipes` and `GET /api/recipes/:id`.
///
/// Only `_id` and `title` are required on the wire; the list endpoint is
/// free to omit the detail fields, which then come back empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recipe {
    /// Server-issued document id.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title.
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Image file name, served by the API host under `/img/`.
    #[serde(default)]
    pub image: String,

    /// Ordered ingredient lines, any length.
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Ordered preparation steps.
    #[serde(default)]
    pub preparation: Vec<PreparationStep>,
}

impl Recipe {
    /// Path of the recipe image on the API host.
    pub fn image_path(&self) -> String {
        format!("/img/{}", self.image)
    }

    /// Builds a recipe from a server id and a (validated) draft.
    pub fn from_draft(id: impl Into<String>, draft: RecipeDraft) -> Self {
        Recipe {
            id: id.into(),
            title: draft.title,
            description: draft.description,
            image: draft.image,
            ingredients: draft.ingredients,
            preparation: draft.preparation,
        }
    }
}

// =============================================================================
// Recipe Draft (form state)
// =============================================================================

/// The add/edit recipe form: one field per known input.
///
/// Serialized as the body of `POST /api/recipes` and `PUT /api/recipes/:id`
/// (a recipe without an id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub preparation: Vec<PreparationStep>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        RecipeDraft {
            title: String::new(),
            description: String::new(),
            image: DEFAULT_IMAGE.to_string(),
            ingredients: Vec::new(),
            preparation: Vec::new(),
        }
    }
}

impl RecipeDraft {
    /// Creates an empty draft with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        RecipeDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.preparation.push(PreparationStep::new(step));
        self
    }

    /// Validates the draft at the form boundary.
    ///
    /// Returns a normalized copy (every text field trimmed) on success.
    /// Nothing is dropped: a blank ingredient or step is an error, not a
    /// silently removed line.
    ///
    /// ## Example
    /// ```rust
    /// use recipe_core::RecipeDraft;
    ///
    /// let draft = RecipeDraft::new("  Toast ").with_ingredient("bread");
    /// let valid = draft.validate().unwrap();
    /// assert_eq!(valid.title, "Toast");
    ///
    /// assert!(RecipeDraft::new("").validate().is_err());
    /// ```
    pub fn validate(&self) -> ValidationResult<RecipeDraft> {
        let title = validate_title(&self.title)?;
        let description = validate_description(&self.description)?;
        let image = validate_image(&self.image)?;
        let ingredients = validate_ingredients(&self.ingredients)?;
        let steps: Vec<String> = self.preparation.iter().map(|p| p.step.clone()).collect();
        let preparation = validate_preparation(&steps)?
            .into_iter()
            .map(PreparationStep::new)
            .collect();

        Ok(RecipeDraft {
            title,
            description,
            image,
            ingredients,
            preparation,
        })
    }

    /// Returns the first validation error, if any.
    pub fn first_error(&self) -> Option<ValidationError> {
        self.validate().err()
    }
}

/// Prefills the edit form from an existing recipe.
impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        RecipeDraft {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            image: recipe.image.clone(),
            ingredients: recipe.ingredients.clone(),
            preparation: recipe.preparation.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
