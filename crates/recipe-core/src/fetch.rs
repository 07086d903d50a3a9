//! # Fetch State
//!
//! The value tracked by an async resource: where its latest request is in
//! its lifecycle, and what it produced.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FetchState Lifecycle                             │
//! │                                                                         │
//! │  ┌──────┐  request()  ┌─────────┐   2xx + body    ┌─────────┐          │
//! │  │ Idle │ ──────────► │ Loading │ ──────────────► │ Success │          │
//! │  └──────┘             └────┬────┘                 └────┬────┘          │
//! │                            │                           │               │
//! │                            │ network / non-2xx /       │ set_data()    │
//! │                            │ bad body                  │ (stays        │
//! │                            ▼                           │  Success)     │
//! │                       ┌─────────┐                      │               │
//! │                       │  Error  │                      │               │
//! │                       └────┬────┘                      │               │
//! │                            │                           │               │
//! │            new identifier  └─────────► Loading ◄───────┘               │
//! │                                                                         │
//! │  INVARIANTS                                                             │
//! │  • data is Some only in Success                                        │
//! │  • error is Some only in Error                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are private; the four constructors are the only way to build a
//! state, so the invariants hold by construction.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Fetch Status
// =============================================================================

/// Lifecycle status of a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// No request issued yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request resolved with data.
    Success,
    /// The latest request failed.
    Error,
}

impl FetchStatus {
    /// Returns true for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchStatus::Success | FetchStatus::Error)
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStatus::Idle => write!(f, "idle"),
            FetchStatus::Loading => write!(f, "loading"),
            FetchStatus::Success => write!(f, "success"),
            FetchStatus::Error => write!(f, "error"),
        }
    }
}

// =============================================================================
// Fetch State
// =============================================================================

/// `{status, data, error}` snapshot of an async resource.
///
/// Serializes as `{"status":"success","data":[...],"error":null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchState<T> {
    status: FetchStatus,
    data: Option<T>,
    error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::idle()
    }
}

impl<T> FetchState<T> {
    /// Initial state: nothing requested.
    pub fn idle() -> Self {
        FetchState {
            status: FetchStatus::Idle,
            data: None,
            error: None,
        }
    }

    /// A request is in flight. Any previous data or error is dropped.
    pub fn loading() -> Self {
        FetchState {
            status: FetchStatus::Loading,
            data: None,
            error: None,
        }
    }

    pub fn success(data: T) -> Self {
        FetchState {
            status: FetchStatus::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        FetchState {
            status: FetchStatus::Error,
            data: None,
            error: Some(message.into()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_idle(&self) -> bool {
        self.status == FetchStatus::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_success(&self) -> bool {
        self.status == FetchStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == FetchStatus::Error
    }

    /// Consumes the state, returning the data if it is `Success`.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Converts into a `Result`, `None` while the fetch is not terminal.
    pub fn into_result(self) -> Option<Result<T, String>> {
        match (self.status, self.data, self.error) {
            (FetchStatus::Success, Some(data), _) => Some(Ok(data)),
            (FetchStatus::Error, _, Some(error)) => Some(Err(error)),
            _ => None,
        }
    }

    // =========================================================================
    // Optimistic Updates
    // =========================================================================

    /// Replaces the data of a `Success` state. The status is unchanged.
    ///
    /// Returns `false` (and leaves the state untouched) in any other status:
    /// there is no data to overwrite while loading or after an error.
    pub fn replace_data(&mut self, data: T) -> bool {
        if self.status != FetchStatus::Success {
            return false;
        }
        self.data = Some(data);
        true
    }

    /// Mutates the data of a `Success` state in place.
    ///
    /// Same status rule as [`FetchState::replace_data`].
    pub fn update_data(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match (self.status, self.data.as_mut()) {
            (FetchStatus::Success, Some(data)) => {
                f(data);
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructors_uphold_invariants() {
        let idle: FetchState<u32> = FetchState::idle();
        assert!(idle.is_idle());
        assert!(idle.data().is_none() && idle.error().is_none());

        let loading: FetchState<u32> = FetchState::loading();
        assert!(loading.is_loading());
        assert!(loading.data().is_none() && loading.error().is_none());

        let ok = FetchState::success(7);
        assert_eq!(ok.data(), Some(&7));
        assert!(ok.error().is_none());

        let err: FetchState<u32> = FetchState::failure("Not Found");
        assert_eq!(err.error(), Some("Not Found"));
        assert!(err.data().is_none());
    }

    #[test]
    fn test_default_is_idle() {
        let state: FetchState<Vec<String>> = FetchState::default();
        assert_eq!(state.status(), FetchStatus::Idle);
    }

    #[test]
    fn test_replace_data_only_in_success() {
        let mut state = FetchState::success(vec![1]);
        assert!(state.replace_data(vec![1, 2]));
        assert_eq!(state.status(), FetchStatus::Success);
        assert_eq!(state.data(), Some(&vec![1, 2]));

        let mut loading: FetchState<Vec<i32>> = FetchState::loading();
        assert!(!loading.replace_data(vec![3]));
        assert_eq!(loading, FetchState::loading());

        let mut failed: FetchState<Vec<i32>> = FetchState::failure("boom");
        assert!(!failed.update_data(|v| v.push(1)));
        assert!(failed.data().is_none());
    }

    #[test]
    fn test_update_data_in_place() {
        let mut state = FetchState::success(vec!["a".to_string()]);
        assert!(state.update_data(|v| v.push("b".to_string())));
        assert_eq!(state.data().map(Vec::len), Some(2));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(FetchState::success(1).into_result(), Some(Ok(1)));
        assert_eq!(
            FetchState::<i32>::failure("x").into_result(),
            Some(Err("x".to_string()))
        );
        assert_eq!(FetchState::<i32>::loading().into_result(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let state = FetchState::success(json!([{"_id": "1", "title": "Toast"}]));
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({
                "status": "success",
                "data": [{"_id": "1", "title": "Toast"}],
                "error": null
            })
        );

        let state: FetchState<()> = FetchState::failure("Not Found");
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"status": "error", "data": null, "error": "Not Found"})
        );
    }

    #[test]
    fn test_status_terminal() {
        assert!(!FetchStatus::Idle.is_terminal());
        assert!(!FetchStatus::Loading.is_terminal());
        assert!(FetchStatus::Success.is_terminal());
        assert!(FetchStatus::Error.is_terminal());
        assert_eq!(FetchStatus::Loading.to_string(), "loading");
    }
}
