#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::net::types::TokenPair;

#[test]
fn access_token_is_none_off_browser() {
    assert_eq!(access_token(), None);
}

#[test]
fn refresh_token_is_none_off_browser() {
    assert_eq!(refresh_token(), None);
}

#[test]
fn is_logged_in_is_false_off_browser() {
    assert!(!is_logged_in());
}

#[test]
fn store_and_clear_are_noops_but_callable() {
    store(&TokenPair {
        access: "a".to_owned(),
        refresh: "r".to_owned(),
    });
    clear();
    assert!(!is_logged_in());
}
