use super::*;
use crate::net::types::User;

fn make_user() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Nguyen".to_owned(),
        phone_number: "+15550100".to_owned(),
        profile_picture: None,
        is_driver: false,
        date_joined: "2025-01-15T08:30:00Z".to_owned(),
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(make_user()), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn redirect_to_is_noop_but_callable() {
    redirect_to("/login");
}
