//! # recipe-client: Async Resource + REST Client for Recipe Book
//!
//! This crate provides every network call of the recipe book: a generic
//! async resource that tracks `{status, data, error}` for one remote
//! resource, and typed access to the recipe REST API built on top of it.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Recipe Client Architecture                       │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     Front end (views / commands)                 │  │
//! │  │  subscribe() / settled() ──► render Loading / data / Error       │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ AsyncResource  │  │   RecipeApi    │  │    ClientConfig        │    │
//! │  │                │  │                │  │                        │    │
//! │  │ Re-fetch on id │  │ list / get /   │  │ recipe-book.toml       │    │
//! │  │ change, stale  │  │ create/update/ │  │ + RECIPE_API_* env     │    │
//! │  │ response guard │  │ delete         │  │                        │    │
//! │  │ optimistic set │  │                │  │                        │    │
//! │  └───────┬────────┘  └───────┬────────┘  └────────────────────────┘    │
//! │          └──────────┬────────┘                                          │
//! │                     ▼                                                   │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                HttpTransport (async trait)                      │   │
//! │  │   ReqwestTransport (production) • StaticTransport/Gated (tests) │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`resource`] - `AsyncResource`, the fetch-state tracker
//! - [`api`] - Recipe endpoints and resource identifiers
//! - [`transport`] - `HttpTransport` trait and the reqwest implementation
//! - [`config`] - Client configuration (base URL, timeout)
//! - [`error`] - Client error types
//! - [`mock`] - In-memory transports for tests and offline use
//!
//! ## Usage
//!
//! ```rust,ignore
//! use recipe_client::{ClientConfig, RecipeApi, ReqwestTransport};
//! use std::sync::Arc;
//!
//! let config = ClientConfig::load_or_default(None);
//! let api = RecipeApi::new(Arc::new(ReqwestTransport::new(&config)?));
//!
//! let recipes = api.list_resource();
//! let state = recipes.settled().await;
//! if let Some(list) = state.data() {
//!     for recipe in list {
//!         println!("{}", recipe.title);
//!     }
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod error;
pub mod mock;
pub mod resource;
pub mod transport;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{RecipeApi, RECIPES_PATH};
pub use config::{ApiSettings, ClientConfig};
pub use error::{ClientError, ClientResult};
pub use resource::AsyncResource;
pub use transport::{
    fetch_json, HttpResponse, HttpTransport, Method, ReqwestTransport, ResourceRequest,
};
