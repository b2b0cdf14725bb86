//! Browser localStorage store for the access/refresh token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only storage access so request plumbing and auth
//! flows never repeat web-sys glue. The refresh token is stored alongside
//! the access token but is never attached to requests from here.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use crate::net::types::TokenPair;

#[cfg(feature = "hydrate")]
const ACCESS_KEY: &str = "access_token";
#[cfg(feature = "hydrate")]
const REFRESH_KEY: &str = "refresh_token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored access token, if any.
pub fn access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(ACCESS_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the stored refresh token, if any.
pub fn refresh_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(REFRESH_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both tokens from a successful login.
pub fn store(tokens: &TokenPair) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.set_item(ACCESS_KEY, &tokens.access);
        let _ = storage.set_item(REFRESH_KEY, &tokens.refresh);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tokens;
    }
}

/// Remove both tokens (logout).
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.remove_item(ACCESS_KEY);
        let _ = storage.remove_item(REFRESH_KEY);
    }
}

/// Whether an access token is currently stored.
pub fn is_logged_in() -> bool {
    access_token().is_some()
}
