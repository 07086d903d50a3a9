//! # Recipe Book Library
//!
//! Core library for the recipe book terminal app. `main.rs` only parses
//! the command line and calls [`run`].
//!
//! ## Module Organization
//! ```text
//! recipe_book/
//! ├── lib.rs          ◄─── You are here (logging + run)
//! ├── cli.rs          ◄─── clap definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Login toggle
//! │   ├── navigation.rs ◄─ Route, Navigator, RouteQueue
//! │   └── recipes.rs  ◄─── List and detail resources
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch + render loop
//! │   └── recipe.rs   ◄─── list, show, add, delete
//! ├── view.rs         ◄─── Plain-text rendering of FetchState
//! └── error.rs        ◄─── App error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;
pub mod view;

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use recipe_client::{ClientConfig, RecipeApi, ReqwestTransport};

use cli::Cli;
use error::AppResult;
use state::Session;

/// Default log filter.
pub const DEFAULT_LOG_FILTER: &str = "warn,recipe=info";

/// Log filter with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "info,recipe=debug";

/// Runs one command against the configured API.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Command Startup                                   │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • --config PATH, else recipe-book.toml in the config dir            │
/// │     • RECIPE_API_URL / RECIPE_API_TIMEOUT_SECS                          │
/// │     • --api-url overrides everything                                    │
/// │                                                                         │
/// │  2. Build Transport ──────────────────────────────────────────────────► │
/// │     • reqwest client with the configured timeout                        │
/// │                                                                         │
/// │  3. Execute Command ──────────────────────────────────────────────────► │
/// │     • views are written to stdout                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Returns `Ok(false)` when a view ended in the `Error` state.
pub async fn run(cli: &Cli) -> AppResult<bool> {
    let config = load_config(cli)?;
    info!(base_url = %config.api.base_url, "Using recipe API");

    let transport = ReqwestTransport::new(&config)?;
    let api = RecipeApi::new(Arc::new(transport));
    let session = Session::new(cli.login);

    let mut stdout = std::io::stdout();
    commands::execute(&cli.command, api, &session, &mut stdout).await
}

/// Loads client configuration and applies `--api-url`.
pub fn load_config(cli: &Cli) -> AppResult<ClientConfig> {
    let mut config = ClientConfig::load(cli.config.clone())?;

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
        config.validate()?;
    }

    Ok(config)
}

/// Initializes the tracing subscriber. Logs go to stderr so stdout only
/// carries views.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=recipe_client=trace` - Trace the client crate only
/// - Default: warnings, plus info from the recipe crates (`-v` for debug)
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
