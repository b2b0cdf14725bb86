//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles authorized HTTP calls, `types` defines the wire schema.

pub mod api;
pub mod types;
