//! # rideshare-client
//!
//! Leptos + WASM frontend for the ride-hailing web application. The crate
//! wraps the backend's JWT-authorized REST API in typed calls and renders
//! the login, dashboard and profile routes.
//!
//! This crate contains pages, components, application state, wire types and
//! the authorized request plumbing. The API server and the SSR host binary
//! live elsewhere.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
