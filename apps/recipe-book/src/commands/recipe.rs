//! # Recipe Commands
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add Recipe Flow                                      │
//! │                                                                         │
//! │  recipe-book --login add --title Toast --ingredient bread               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session logged in? ── no ──► NotLoggedIn                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RecipeDraft::validate() ── invalid ──► ValidationError (nothing sent)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list resource settled ─► POST /api/recipes ─► created recipe           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list.update_data(push created)   (no second GET)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  navigate(Route::Home) ──► render loop prints the list                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Delete follows the same shape with `retain` instead of `push`.

use tracing::{debug, info, warn};

use recipe_core::validation::validate_recipe_id;
use recipe_core::{Recipe, RecipeDraft};

use crate::error::AppResult;
use crate::state::{Navigator, RecipeState, Route, Session};

/// Shows the recipe list.
pub fn list(navigator: &Navigator) {
    debug!("list command");
    navigator.navigate(Route::Home);
}

/// Shows recipe `id`.
pub fn show(navigator: &Navigator, id: &str) -> AppResult<()> {
    let id = validate_recipe_id(id)?;
    debug!(id = %id, "show command");
    navigator.navigate(Route::Recipe(id));
    Ok(())
}

/// Creates a recipe and appends it to the list without re-fetching.
pub async fn add(
    recipes: &RecipeState,
    session: &Session,
    navigator: &Navigator,
    draft: &RecipeDraft,
) -> AppResult<Recipe> {
    session.require_login("add")?;
    let draft = draft.validate()?;
    debug!(title = %draft.title, "add command");

    recipes.load_list().await;
    let created = recipes.api().create(&draft).await?;

    let appended = recipes.list().update_data(|list| list.push(created.clone()));
    if !appended {
        warn!("Recipe list not loaded, reloading instead of appending");
        recipes.list().reload();
    }

    info!(id = %created.id, title = %created.title, "Recipe added");
    navigator.navigate(Route::Home);
    Ok(created)
}

/// Deletes a recipe and removes it from the list without re-fetching.
pub async fn delete(
    recipes: &RecipeState,
    session: &Session,
    navigator: &Navigator,
    id: &str,
) -> AppResult<()> {
    session.require_login("delete")?;
    let id = validate_recipe_id(id)?;
    debug!(id = %id, "delete command");

    recipes.load_list().await;
    recipes.api().delete(&id).await?;

    let removed = recipes.list().update_data(|list| list.retain(|r| r.id != id));
    if !removed {
        warn!("Recipe list not loaded, reloading instead of removing");
        recipes.list().reload();
    }

    info!(id = %id, "Recipe deleted");
    navigator.navigate(Route::Home);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::RouteQueue;
    use recipe_client::mock::StaticTransport;
    use recipe_client::{HttpResponse, Method, RecipeApi};
    use serde_json::json;
    use std::sync::Arc;

    fn server() -> Arc<StaticTransport> {
        Arc::new(
            StaticTransport::new()
                .route(
                    Method::Get,
                    "/api/recipes",
                    HttpResponse::json(200, &json!([{"_id": "1", "title": "Toast"}])),
                )
                .route(
                    Method::Post,
                    "/api/recipes",
                    HttpResponse::json(201, &json!({"_id": "2", "title": "Eggs"})),
                )
                .route(Method::Delete, "/api/recipes/1", HttpResponse::empty(204)),
        )
    }

    #[tokio::test]
    async fn test_add_appends_without_refetch() {
        let transport = server();
        let recipes = RecipeState::new(RecipeApi::new(transport.clone()));
        let queue = RouteQueue::new();

        let created = add(
            &recipes,
            &Session::new(true),
            &queue.navigator(),
            &RecipeDraft::new("Eggs"),
        )
        .await
        .unwrap();
        assert_eq!(created.id, "2");

        let list = recipes.load_list().await.into_data().unwrap();
        let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let gets = transport
            .calls()
            .iter()
            .filter(|c| c.method() == Method::Get)
            .count();
        assert_eq!(gets, 1);
        assert_eq!(queue.next(), Some(Route::Home));
    }

    #[tokio::test]
    async fn test_add_requires_login() {
        let transport = server();
        let recipes = RecipeState::new(RecipeApi::new(transport.clone()));
        let queue = RouteQueue::new();

        let err = add(&recipes, &Session::default(), &queue.navigator(), &RecipeDraft::new("Eggs"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotLoggedIn);
        assert!(transport.calls().is_empty());
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_draft_before_sending() {
        let transport = server();
        let recipes = RecipeState::new(RecipeApi::new(transport.clone()));

        let err = add(
            &recipes,
            &Session::new(true),
            &RouteQueue::new().navigator(),
            &RecipeDraft::new("Eggs").with_ingredient("  "),
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "ingredients entry 1 is blank");
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_with_failed_list_reloads() {
        let transport = Arc::new(
            StaticTransport::new()
                .route(Method::Get, "/api/recipes", HttpResponse::empty(500))
                .route(
                    Method::Post,
                    "/api/recipes",
                    HttpResponse::json(201, &json!({"_id": "2", "title": "Eggs"})),
                ),
        );
        let recipes = RecipeState::new(RecipeApi::new(transport.clone()));

        add(
            &recipes,
            &Session::new(true),
            &RouteQueue::new().navigator(),
            &RecipeDraft::new("Eggs"),
        )
        .await
        .unwrap();

        // The reload task has not run yet on the single-threaded test runtime
        transport.set_route(
            Method::Get,
            "/api/recipes",
            HttpResponse::json(200, &json!([{"_id": "2", "title": "Eggs"}])),
        );
        let state = recipes.list().settled().await;
        assert!(state.is_success());
        assert_eq!(state.data().unwrap()[0].id, "2");
        let gets = transport
            .calls()
            .iter()
            .filter(|c| c.method() == Method::Get)
            .count();
        assert_eq!(gets, 2);
    }

    #[tokio::test]
    async fn test_delete_removes_from_list() {
        let transport = server();
        let recipes = RecipeState::new(RecipeApi::new(transport.clone()));
        let queue = RouteQueue::new();

        delete(&recipes, &Session::new(true), &queue.navigator(), "1")
            .await
            .unwrap();

        let list = recipes.list().state().into_data().unwrap();
        assert!(list.is_empty());
        assert_eq!(queue.next(), Some(Route::Home));
    }

    #[tokio::test]
    async fn test_delete_missing_recipe_keeps_list() {
        let transport = server();
        let recipes = RecipeState::new(RecipeApi::new(transport));
        let queue = RouteQueue::new();

        let err = delete(&recipes, &Session::new(true), &queue.navigator(), "9")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(recipes.list().state().data().unwrap().len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_show_validates_id() {
        let queue = RouteQueue::new();
        assert!(show(&queue.navigator(), "").is_err());
        show(&queue.navigator(), " 7 ").unwrap();
        assert_eq!(queue.next(), Some(Route::Recipe("7".into())));
    }
}
