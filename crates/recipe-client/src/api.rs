//! # Recipe API
//!
//! Resource identifiers and one-shot operations for the recipe REST API.
//!
//! ## Endpoints
//! ```text
//! ┌──────────┬──────────────────────┬──────────────┬──────────────────────┐
//! │ Method   │ Path                 │ Body         │ Response             │
//! ├──────────┼──────────────────────┼──────────────┼──────────────────────┤
//! │ GET      │ /api/recipes         │ -            │ Recipe[]             │
//! │ GET      │ /api/recipes/:id     │ -            │ Recipe               │
//! │ POST     │ /api/recipes         │ RecipeDraft  │ Recipe (with _id)    │
//! │ PUT      │ /api/recipes/:id     │ RecipeDraft  │ Recipe               │
//! │ DELETE   │ /api/recipes/:id     │ -            │ empty or JSON        │
//! └──────────┴──────────────────────┴──────────────┴──────────────────────┘
//! ```
//!
//! Reads go through [`AsyncResource`] so the front end can render their
//! state; writes are one-shot calls whose results are applied to the read
//! resources optimistically.

use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use recipe_core::validation::validate_recipe_id;
use recipe_core::{Recipe, RecipeDraft};

use crate::error::{ClientError, ClientResult};
use crate::resource::AsyncResource;
use crate::transport::{fetch_json, HttpTransport, Method, ResourceRequest};

/// Collection path of the recipe API.
pub const RECIPES_PATH: &str = "/api/recipes";

// =============================================================================
// Resource Identifiers
// =============================================================================

/// `GET /api/recipes`
pub fn recipes() -> ResourceRequest {
    ResourceRequest::get(RECIPES_PATH)
}

/// `GET /api/recipes/:id`
pub fn recipe(id: &str) -> ClientResult<ResourceRequest> {
    Ok(ResourceRequest::get(recipe_path(id)?))
}

/// Path of one recipe, with the id percent-encoded as a single segment.
pub fn recipe_path(id: &str) -> ClientResult<String> {
    let id = validate_recipe_id(id)?;

    let mut url = Url::parse("http://localhost")?;
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidUrl("base cannot hold a path".into()))?
        .extend(["api", "recipes", id.as_str()]);

    Ok(url.path().to_string())
}

// =============================================================================
// Recipe API
// =============================================================================

/// Typed access to the recipe endpoints over any [`HttpTransport`].
///
/// ## Usage
/// ```rust,ignore
/// let api = RecipeApi::new(Arc::new(ReqwestTransport::new(&config)?));
///
/// let list = api.list_resource();
/// let state = list.settled().await;
///
/// let created = api.create(&RecipeDraft::new("Toast")).await?;
/// list.update_data(|recipes| recipes.push(created));
/// ```
#[derive(Clone)]
pub struct RecipeApi {
    transport: Arc<dyn HttpTransport>,
}

impl RecipeApi {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        RecipeApi { transport }
    }

    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        Arc::clone(&self.transport)
    }

    // =========================================================================
    // Resources
    // =========================================================================

    /// The recipe list, already requested.
    pub fn list_resource(&self) -> AsyncResource<Vec<Recipe>> {
        AsyncResource::fetch(self.transport(), recipes())
    }

    /// One recipe, already requested. Point it at another recipe with
    /// `resource.request(api::recipe(other_id)?)`.
    pub fn recipe_resource(&self, id: &str) -> ClientResult<AsyncResource<Recipe>> {
        Ok(AsyncResource::fetch(self.transport(), recipe(id)?))
    }

    // =========================================================================
    // One-shot Operations
    // =========================================================================

    pub async fn list(&self) -> ClientResult<Vec<Recipe>> {
        fetch_json(self.transport.as_ref(), &recipes()).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Recipe> {
        fetch_json(self.transport.as_ref(), &recipe(id)?).await
    }

    /// Validates `draft` and creates it. Returns the stored recipe with its
    /// server id.
    pub async fn create(&self, draft: &RecipeDraft) -> ClientResult<Recipe> {
        let draft = draft.validate()?;
        let request = ResourceRequest::new(Method::Post, RECIPES_PATH).with_json(&draft)?;

        let created: Recipe = fetch_json(self.transport.as_ref(), &request).await?;
        info!(id = %created.id, title = %created.title, "Recipe created");
        Ok(created)
    }

    /// Validates `draft` and replaces recipe `id` with it.
    pub async fn update(&self, id: &str, draft: &RecipeDraft) -> ClientResult<Recipe> {
        let draft = draft.validate()?;
        let request = ResourceRequest::new(Method::Put, recipe_path(id)?).with_json(&draft)?;

        let updated: Recipe = fetch_json(self.transport.as_ref(), &request).await?;
        info!(id = %updated.id, "Recipe updated");
        Ok(updated)
    }

    /// Deletes recipe `id`. Any 2xx answer counts as success; the body is
    /// ignored.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let request = ResourceRequest::delete(recipe_path(id)?);

        let response = self.transport.send(&request).await?.error_for_status()?;
        debug!(status = response.status, "Delete acknowledged");
        info!(id = %id.trim(), "Recipe deleted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
