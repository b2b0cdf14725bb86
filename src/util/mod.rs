//! Cross-cutting helpers shared by pages and components.

pub mod auth;
pub mod tokens;
