//! # Async Resource
//!
//! Fetches one remote resource and exposes its `{status, data, error}`
//! state, re-fetching whenever the resource identifier changes.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      AsyncResource Lifecycle                            │
//! │                                                                         │
//! │  request(/api/recipes/1)                                                │
//! │     │  generation = 1, state = Loading                                  │
//! │     ├──────────────► spawn ─── send ─────────────┐                      │
//! │     │                                             │                     │
//! │  request(/api/recipes/2)                          │                     │
//! │     │  generation = 2, state = Loading            │                     │
//! │     ├──────────────► spawn ─── send ───┐          │                     │
//! │                                         ▼          │                     │
//! │                     response for 2 (gen 2 == 2) ──► Success(recipe 2)   │
//! │                                                    ▼                     │
//! │                     response for 1 (gen 1 != 2) ──► discarded           │
//! │                                                                         │
//! │  STALE RESPONSE GUARD                                                   │
//! │  ────────────────────                                                   │
//! │  • Every request gets the next generation number                       │
//! │  • A completion may write state only if its generation is still the    │
//! │    latest; the check and the write happen under one lock               │
//! │  • Stale requests are not aborted, only ignored on arrival             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Observing State
//! - [`AsyncResource::state`] - snapshot
//! - [`AsyncResource::subscribe`] - `watch` receiver notified on every
//!   visible change (the equivalent of a component re-render)
//! - [`AsyncResource::settled`] - waits until the latest request resolves
//!
//! ## Errors
//! Failures never leave the resource: network errors, non-2xx statuses and
//! unparseable bodies all become `FetchStatus::Error` with a message.

use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, warn};

use recipe_core::{FetchState, FetchStatus};

use crate::error::ClientResult;
use crate::transport::{fetch_json, HttpTransport, ResourceRequest};

// =============================================================================
// Shared State
// =============================================================================

/// Which request currently owns the state.
#[derive(Debug, Default)]
struct Tracker {
    generation: u64,
    current: Option<ResourceRequest>,
}

struct Shared<T> {
    tracker: Mutex<Tracker>,
    state_tx: watch::Sender<FetchState<T>>,
}

impl<T> Shared<T> {
    fn tracker(&self) -> MutexGuard<'_, Tracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies the outcome of request `generation` if it is still current.
    fn resolve(&self, generation: u64, request: &ResourceRequest, outcome: ClientResult<T>) {
        let tracker = self.tracker();

        if tracker.generation != generation {
            debug!(
                %request,
                generation,
                latest = tracker.generation,
                "Discarding stale response"
            );
            return;
        }

        let next = match outcome {
            Ok(data) => {
                debug!(%request, generation, "Resource loaded");
                FetchState::success(data)
            }
            Err(e) => {
                warn!(%request, generation, error = %e, "Resource request failed");
                FetchState::failure(e.to_string())
            }
        };

        self.state_tx.send_replace(next);
    }
}

// =============================================================================
// Async Resource
// =============================================================================

/// A remote resource with loading/data/error state.
///
/// One in-flight request at a time matters: a newer request supersedes the
/// effect of any older one still in flight. No retry, no caching, no
/// request deduplication.
///
/// Requests are spawned on the ambient Tokio runtime, so [`request`] and
/// [`reload`] must be called from within one.
///
/// ## Usage
/// ```rust,ignore
/// let recipes: AsyncResource<Vec<Recipe>> = AsyncResource::new(transport);
/// recipes.request(ResourceRequest::get("/api/recipes"));
///
/// let state = recipes.settled().await;
/// match state.status() {
///     FetchStatus::Success => render(state.data().unwrap()),
///     FetchStatus::Error => eprintln!("{}", state.error().unwrap()),
///     _ => unreachable!(),
/// }
///
/// // After a successful POST, show the new recipe without a round trip
/// recipes.update_data(|list| list.push(created));
/// ```
///
/// [`request`]: AsyncResource::request
/// [`reload`]: AsyncResource::reload
pub struct AsyncResource<T> {
    transport: Arc<dyn HttpTransport>,
    shared: Arc<Shared<T>>,
}

impl<T> Clone for AsyncResource<T> {
    fn clone(&self) -> Self {
        AsyncResource {
            transport: Arc::clone(&self.transport),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> AsyncResource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Creates an `Idle` resource. Nothing is fetched until [`request`].
    ///
    /// [`request`]: AsyncResource::request
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        let (state_tx, _) = watch::channel(FetchState::idle());
        AsyncResource {
            transport,
            shared: Arc::new(Shared {
                tracker: Mutex::new(Tracker::default()),
                state_tx,
            }),
        }
    }

    /// Creates a resource and immediately requests `request`.
    pub fn fetch(transport: Arc<dyn HttpTransport>, request: ResourceRequest) -> Self {
        let resource = Self::new(transport);
        resource.request(request);
        resource
    }

    /// Points the resource at `request`.
    ///
    /// If `request` differs from the current identifier, the state moves to
    /// `Loading` and exactly one request is issued; any in-flight request
    /// becomes stale. Returns false (and does nothing) if `request` is
    /// already current.
    pub fn request(&self, request: ResourceRequest) -> bool {
        let mut tracker = self.shared.tracker();

        if tracker.current.as_ref() == Some(&request) {
            debug!(%request, "Resource identifier unchanged");
            return false;
        }

        self.begin(&mut tracker, request);
        true
    }

    /// Re-issues the current identifier, superseding any in-flight request.
    ///
    /// Returns false if nothing has been requested yet.
    pub fn reload(&self) -> bool {
        let mut tracker = self.shared.tracker();

        match tracker.current.clone() {
            Some(request) => {
                self.begin(&mut tracker, request);
                true
            }
            None => false,
        }
    }

    /// Starts a new generation. Caller holds the tracker lock.
    fn begin(&self, tracker: &mut Tracker, request: ResourceRequest) {
        tracker.generation += 1;
        tracker.current = Some(request.clone());
        let generation = tracker.generation;

        self.shared.state_tx.send_replace(FetchState::loading());
        debug!(%request, generation, "Resource loading");

        let transport = Arc::clone(&self.transport);
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            let outcome = fetch_json::<T>(transport.as_ref(), &request).await;
            shared.resolve(generation, &request, outcome);
        });
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.shared.state_tx.borrow().clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.shared.state_tx.borrow().status()
    }

    /// The identifier the state currently belongs to.
    pub fn current_request(&self) -> Option<ResourceRequest> {
        self.shared.tracker().current.clone()
    }

    /// Receiver notified on every visible state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.shared.state_tx.subscribe()
    }

    /// Waits until the resource is no longer `Loading` and returns the
    /// state. Returns immediately when `Idle` or already resolved.
    pub async fn settled(&self) -> FetchState<T> {
        let mut rx = self.subscribe();
        let result = rx
            .wait_for(|state| state.status() != FetchStatus::Loading)
            .await
            .map(|state| state.clone());

        // The sender lives in `self.shared`, so the channel cannot close
        // while we hold `self`.
        result.unwrap_or_else(|_| self.state())
    }

    // =========================================================================
    // Optimistic Updates
    // =========================================================================

    /// Replaces `data` without a round trip. `status` stays `Success`.
    ///
    /// Only effective in `Success`; returns false otherwise.
    pub fn set_data(&self, data: T) -> bool {
        let applied = self
            .shared
            .state_tx
            .send_if_modified(|state| state.replace_data(data));
        debug!(applied, "Optimistic data replacement");
        applied
    }

    /// Mutates `data` in place without a round trip.
    ///
    /// Same rule as [`AsyncResource::set_data`].
    pub fn update_data(&self, f: impl FnOnce(&mut T)) -> bool {
        let applied = self
            .shared
            .state_tx
            .send_if_modified(|state| state.update_data(f));
        debug!(applied, "Optimistic data update");
        applied
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
