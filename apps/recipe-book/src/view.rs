//! # Views
//!
//! Plain-text rendering of resource state. Every view takes a
//! [`FetchState`] and renders all four statuses:
//!
//! | Status  | Output                       |
//! |---------|------------------------------|
//! | Idle    | nothing                      |
//! | Loading | `Loading...`                 |
//! | Error   | `Error: <message>`           |
//! | Success | the recipe list or detail    |

use std::fmt::Write;

use recipe_core::{FetchState, FetchStatus, Recipe};

use crate::state::{Route, Session};

pub const LOADING: &str = "Loading...";

/// Renders the non-success statuses. `None` means the caller renders data.
fn render_status<T>(state: &FetchState<T>) -> Option<String> {
    match state.status() {
        FetchStatus::Idle => Some(String::new()),
        FetchStatus::Loading => Some(LOADING.to_string()),
        FetchStatus::Error => Some(format!("Error: {}", state.error().unwrap_or("unknown error"))),
        FetchStatus::Success => None,
    }
}

/// Header line with the login toggle.
pub fn render_header(session: &Session) -> String {
    if session.is_logged_in() {
        "Recipes!  [logged in]".to_string()
    } else {
        "Recipes!  [logged out]".to_string()
    }
}

/// One list entry: title with its link, description and image.
pub fn render_card(recipe: &Recipe) -> String {
    let mut out = format!("{}  ({})", recipe.title, Route::Recipe(recipe.id.clone()));
    if !recipe.description.is_empty() {
        let _ = write!(out, "\n  {}", recipe.description);
    }
    if !recipe.image.is_empty() {
        let _ = write!(out, "\n  image: {}", recipe.image_path());
    }
    out
}

/// The home screen.
pub fn render_recipes(state: &FetchState<Vec<Recipe>>) -> String {
    if let Some(out) = render_status(state) {
        return out;
    }

    match state.data() {
        Some(recipes) if !recipes.is_empty() => recipes
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n\n"),
        _ => "No recipes yet.".to_string(),
    }
}

/// The detail screen.
pub fn render_recipe(state: &FetchState<Recipe>) -> String {
    if let Some(out) = render_status(state) {
        return out;
    }
    let Some(recipe) = state.data() else {
        return String::new();
    };

    let mut out = recipe.title.clone();
    if !recipe.description.is_empty() {
        let _ = write!(out, "\n{}", recipe.description);
    }
    if !recipe.image.is_empty() {
        let _ = write!(out, "\nimage: {}", recipe.image_path());
    }

    out.push_str("\n\nIngredients");
    for ingredient in &recipe.ingredients {
        let _ = write!(out, "\n  - {}", ingredient);
    }

    out.push_str("\n\nPreparation");
    for (i, prep) in recipe.preparation.iter().enumerate() {
        let _ = write!(out, "\n  {}. {}", i + 1, prep.step);
    }

    let _ = write!(out, "\n\nHome ({})", Route::Home);
    out
}
