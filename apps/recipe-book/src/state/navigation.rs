//! # Navigation
//!
//! Views never switch screens themselves. They are handed a [`Navigator`]
//! and ask it for a [`Route`]; whoever built the navigator decides what
//! happens next. In the terminal app the navigator feeds a [`RouteQueue`]
//! that the render loop drains.
//!
//! ```text
//!  command / view ── navigate(Route::Recipe("1")) ──► callback
//!                                                        │
//!                                        RouteQueue ◄────┘
//!                                            │
//!                               render loop: next() ──► render detail view
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// A screen of the recipe book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The recipe list.
    Home,
    /// One recipe, by id.
    Recipe(String),
}

impl Route {
    /// Link path of the route (`/` or `/<id>`).
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Recipe(id) => format!("/{}", id),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Navigation callback passed into views.
#[derive(Clone)]
pub struct Navigator {
    callback: Arc<dyn Fn(Route) + Send + Sync>,
}

impl Navigator {
    pub fn new(callback: impl Fn(Route) + Send + Sync + 'static) -> Self {
        Navigator {
            callback: Arc::new(callback),
        }
    }

    pub fn navigate(&self, route: Route) {
        debug!(%route, "Navigate");
        (self.callback)(route);
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator").finish_non_exhaustive()
    }
}

/// Routes requested but not yet rendered, in request order.
#[derive(Debug, Clone, Default)]
pub struct RouteQueue {
    pending: Arc<Mutex<VecDeque<Route>>>,
}

impl RouteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator that appends to this queue.
    pub fn navigator(&self) -> Navigator {
        let pending = Arc::clone(&self.pending);
        Navigator::new(move |route| {
            pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push_back(route);
        })
    }

    pub fn next(&self) -> Option<Route> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Recipe("5f1".into()).to_string(), "/5f1");
    }

    #[test]
    fn test_queue_preserves_order() {
        let queue = RouteQueue::new();
        let navigator = queue.navigator();

        navigator.navigate(Route::Recipe("1".into()));
        navigator.clone().navigate(Route::Home);

        assert_eq!(queue.next(), Some(Route::Recipe("1".into())));
        assert_eq!(queue.next(), Some(Route::Home));
        assert!(queue.is_empty());
        assert_eq!(queue.next(), None);
    }

    #[test]
    fn test_custom_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let navigator = Navigator::new({
            let seen = Arc::clone(&seen);
            move |route| seen.lock().unwrap().push(route)
        });

        navigator.navigate(Route::Home);
        assert_eq!(*seen.lock().unwrap(), vec![Route::Home]);
    }
}
