//! # Session State
//!
//! The login flag of the navigation bar, set once from `--login`. It only
//! decides whether the add/delete actions are offered; nothing is
//! authenticated.

use crate::error::{AppError, AppResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    pub fn new(logged_in: bool) -> Self {
        Session { logged_in }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Fails with `NotLoggedIn` unless the session is logged in.
    pub fn require_login(&self, action: &str) -> AppResult<()> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(AppError::not_logged_in(action))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_require_login() {
        assert!(!Session::default().is_logged_in());
        assert!(Session::new(true).require_login("add").is_ok());

        let err = Session::new(false).require_login("add").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotLoggedIn);
        assert_eq!(err.message, "Log in to add recipes (pass --login)");
    }
}
