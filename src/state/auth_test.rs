use super::*;

#[test]
fn auth_state_default_is_signed_out_and_settled() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn is_driver_false_without_user() {
    assert!(!AuthState::default().is_driver());
}

#[test]
fn is_driver_follows_user_flag() {
    let mut user = User {
        id: 1,
        username: "dana".to_owned(),
        email: "dana@example.com".to_owned(),
        first_name: "Dana".to_owned(),
        last_name: "Cole".to_owned(),
        phone_number: "+15550123".to_owned(),
        profile_picture: None,
        is_driver: true,
        date_joined: "2025-01-01T00:00:00Z".to_owned(),
    };
    let state = AuthState { user: Some(user.clone()), loading: false };
    assert!(state.is_driver());

    user.is_driver = false;
    let state = AuthState { user: Some(user), loading: false };
    assert!(!state.is_driver());
}
