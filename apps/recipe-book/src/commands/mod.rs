//! # Commands Module
//!
//! Every subcommand of the recipe book, plus the render loop that turns
//! navigation requests into printed views.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch + render loop)
//! └── recipe.rs   ◄─── list, show, add, delete
//! ```
//!
//! ## How a Command Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  execute(Command::Show { id: "1" })                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  recipe::show() ── navigator.navigate(Route::Recipe("1"))              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render loop: RouteQueue::next()                                        │
//! │         │                                                               │
//! │         ├── point RecipeState.detail at /api/recipes/1                 │
//! │         ├── print every state change: "Loading..." then detail         │
//! │         ▼                                                               │
//! │  queue empty ──► done (false if any view ended in Error)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod recipe;

use std::io::Write;

use recipe_client::{AsyncResource, RecipeApi};
use recipe_core::{FetchState, FetchStatus};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::Command;
use crate::error::AppResult;
use crate::state::{RecipeState, Route, RouteQueue, Session};
use crate::view;

/// Runs `command` and renders the routes it requested.
///
/// Returns `Ok(false)` when a rendered view ended in the `Error` state
/// (the error has already been printed).
pub async fn execute<W: Write>(
    command: &Command,
    api: RecipeApi,
    session: &Session,
    out: &mut W,
) -> AppResult<bool> {
    let recipes = RecipeState::new(api);
    let routes = RouteQueue::new();
    let navigator = routes.navigator();

    writeln!(out, "{}", view::render_header(session))?;

    match command {
        Command::List => recipe::list(&navigator),
        Command::Show { id } => recipe::show(&navigator, id)?,
        Command::Add(args) => {
            recipe::add(&recipes, session, &navigator, &args.to_draft()).await?;
        }
        Command::Delete { id } => recipe::delete(&recipes, session, &navigator, id).await?,
    }

    let mut all_ok = true;
    while let Some(route) = routes.next() {
        all_ok &= render_route(&recipes, &route, out).await?;
    }

    Ok(all_ok)
}

/// Renders one route until its resource settles.
async fn render_route<W: Write>(
    recipes: &RecipeState,
    route: &Route,
    out: &mut W,
) -> AppResult<bool> {
    debug!(%route, "Rendering route");
    writeln!(out)?;

    let status = match route {
        Route::Home => {
            let started = recipes.open_list();
            render_until_settled(recipes.list(), started, out, view::render_recipes).await?
        }
        Route::Recipe(id) => {
            let started = recipes.open_recipe(id)?;
            render_until_settled(recipes.detail(), started, out, view::render_recipe).await?
        }
    };

    Ok(status != FetchStatus::Error)
}

/// Prints the view for every state the resource passes through, ending
/// with the first non-loading one.
///
/// `started` means the resource was just re-pointed. The loading view is
/// then printed even if the response has already landed, and printed once.
async fn render_until_settled<T, W>(
    resource: &AsyncResource<T>,
    started: bool,
    out: &mut W,
    render: fn(&FetchState<T>) -> String,
) -> AppResult<FetchStatus>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    W: Write,
{
    let mut rx = resource.subscribe();

    let mut shown_loading = started;
    if started {
        writeln!(out, "{}", render(&FetchState::loading()))?;
    }

    loop {
        let state = rx.borrow_and_update().clone();
        let status = state.status();

        if status != FetchStatus::Loading {
            writeln!(out, "{}", render(&state))?;
            return Ok(status);
        }
        if !shown_loading {
            writeln!(out, "{}", render(&state))?;
            shown_loading = true;
        }

        if rx.changed().await.is_err() {
            return Ok(resource.status());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::AddArgs;
    use crate::error::ErrorCode;
    use recipe_client::mock::StaticTransport;
    use recipe_client::{HttpResponse, Method};
    use serde_json::json;
    use std::sync::Arc;

    fn api() -> RecipeApi {
        RecipeApi::new(Arc::new(
            StaticTransport::new()
                .route(
                    Method::Get,
                    "/api/recipes",
                    HttpResponse::json(
                        200,
                        &json!([{"_id": "1", "title": "Toast", "image": "toast.png"}]),
                    ),
                )
                .route(
                    Method::Get,
                    "/api/recipes/1",
                    HttpResponse::json(
                        200,
                        &json!({
                            "_id": "1",
                            "title": "Toast",
                            "ingredients": ["bread"],
                            "preparation": [{"step": "Toast the bread"}]
                        }),
                    ),
                )
                .route(
                    Method::Post,
                    "/api/recipes",
                    HttpResponse::json(201, &json!({"_id": "2", "title": "Eggs"})),
                ),
        ))
    }

    async fn run(command: Command, session: Session) -> (AppResult<bool>, String) {
        let mut out = Vec::new();
        let result = execute(&command, api(), &session, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_list_prints_loading_then_recipes() {
        let (result, out) = run(Command::List, Session::default()).await;
        assert!(result.unwrap());

        let loading = out.find("Loading...").unwrap();
        let toast = out.find("Toast  (/1)").unwrap();
        assert!(loading < toast);
        assert!(out.starts_with("Recipes!  [logged out]"));
    }

    #[tokio::test]
    async fn test_show_prints_detail() {
        let (result, out) = run(Command::Show { id: "1".into() }, Session::default()).await;
        assert!(result.unwrap());
        assert!(out.contains("Ingredients\n  - bread"));
        assert!(out.contains("1. Toast the bread"));
    }

    #[tokio::test]
    async fn test_show_missing_prints_error_state() {
        let (result, out) = run(Command::Show { id: "99".into() }, Session::default()).await;
        assert!(!result.unwrap());
        assert!(out.contains("Error: Not Found"));
    }

    #[tokio::test]
    async fn test_add_prints_list_with_new_recipe() {
        let command = Command::Add(AddArgs {
            title: "Eggs".into(),
            description: String::new(),
            image: "eggs.png".into(),
            ingredients: vec!["eggs".into()],
            steps: vec!["Boil".into()],
        });
        let (result, out) = run(command, Session::new(true)).await;
        assert!(result.unwrap());
        assert!(out.contains("Toast  (/1)"));
        assert!(out.contains("Eggs  (/2)"));
        // List was already loaded, so the home view renders without Loading
        assert!(!out.contains("Loading..."));
    }

    #[tokio::test]
    async fn test_started_fetch_prints_loading_even_if_already_settled() {
        let recipes = RecipeState::new(api());
        assert!(recipes.open_list());
        // Response lands before the render loop subscribes
        assert!(recipes.list().settled().await.is_success());

        let mut out = Vec::new();
        let status = render_until_settled(recipes.list(), true, &mut out, view::render_recipes)
            .await
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(status, FetchStatus::Success);
        assert_eq!(out.matches("Loading...").count(), 1);
        assert!(out.find("Loading...").unwrap() < out.find("Toast  (/1)").unwrap());
    }

    #[tokio::test]
    async fn test_unchanged_resource_renders_without_loading() {
        let recipes = RecipeState::new(api());
        recipes.load_list().await;

        let mut out = Vec::new();
        let started = recipes.open_list();
        render_until_settled(recipes.list(), started, &mut out, view::render_recipes)
            .await
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(!started);
        assert!(!out.contains("Loading..."));
        assert!(out.contains("Toast  (/1)"));
    }

    #[tokio::test]
    async fn test_delete_without_login_fails() {
        let (result, out) = run(Command::Delete { id: "1".into() }, Session::default()).await;
        assert_eq!(result.unwrap_err().code, ErrorCode::NotLoggedIn);
        assert!(!out.contains("Toast"));
    }
}
