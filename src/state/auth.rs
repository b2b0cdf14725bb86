//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. `loading` stays `true` from
//! startup until the `/api/users/me/` probe settles.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current account and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Whether the current account may perform driver actions.
    pub fn is_driver(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_driver)
    }
}
