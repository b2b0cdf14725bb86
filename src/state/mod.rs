//! Shared application state provided as `RwSignal` contexts.
//!
//! ARCHITECTURE
//! ============
//! Each concern gets its own plain struct so pages subscribe only to the
//! slices they render.

pub mod auth;
pub mod bookings;
pub mod notifications;
