//! # Recipe State
//!
//! The two resources the views read from: the recipe list and the recipe
//! currently shown in detail. Each lives for the whole session, so
//! switching the detail view to another recipe re-points the same resource
//! and a late answer for the previous recipe is discarded.

use recipe_client::{api, AsyncResource, RecipeApi};
use recipe_core::{FetchState, Recipe};

use crate::error::AppResult;

pub struct RecipeState {
    api: RecipeApi,
    list: AsyncResource<Vec<Recipe>>,
    detail: AsyncResource<Recipe>,
}

impl RecipeState {
    /// Creates idle resources. Nothing is fetched until a view needs it.
    pub fn new(api: RecipeApi) -> Self {
        RecipeState {
            list: AsyncResource::new(api.transport()),
            detail: AsyncResource::new(api.transport()),
            api,
        }
    }

    pub fn api(&self) -> &RecipeApi {
        &self.api
    }

    pub fn list(&self) -> &AsyncResource<Vec<Recipe>> {
        &self.list
    }

    pub fn detail(&self) -> &AsyncResource<Recipe> {
        &self.detail
    }

    /// Points the list resource at `/api/recipes`. A no-op after the first
    /// call, so optimistic edits are kept.
    ///
    /// Returns true if a fetch was started.
    pub fn open_list(&self) -> bool {
        self.list.request(api::recipes())
    }

    /// Points the detail resource at recipe `id`. Returns true if a fetch
    /// was started.
    pub fn open_recipe(&self, id: &str) -> AppResult<bool> {
        Ok(self.detail.request(api::recipe(id)?))
    }

    /// Opens the list and waits for it to settle.
    pub async fn load_list(&self) -> FetchState<Vec<Recipe>> {
        self.open_list();
        self.list.settled().await
    }
}
