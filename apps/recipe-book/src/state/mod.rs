//! # State Module
//!
//! View state for the recipe book. Each concern is its own type and each
//! command takes only what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────────────┐  │
//! │  │   Session    │  │   RouteQueue     │  │     RecipeState          │  │
//! │  │              │  │                  │  │                          │  │
//! │  │  logged_in   │  │  Navigator ──►   │  │  list: AsyncResource     │  │
//! │  │  (client     │  │  pending routes  │  │  detail: AsyncResource   │  │
//! │  │   only)      │  │  for the loop    │  │  api: RecipeApi          │  │
//! │  └──────────────┘  └──────────────────┘  └──────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Session: Copy flag, fixed for the run by --login                    │
//! │  • RouteQueue: Arc<Mutex<VecDeque<Route>>> shared with its Navigators  │
//! │  • RecipeState: resources are internally synchronized                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod navigation;
mod recipes;
mod session;

pub use navigation::{Navigator, Route, RouteQueue};
pub use recipes::RecipeState;
pub use session::Session;
