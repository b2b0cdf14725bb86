//! Booking-list state for the dashboard.
//!
//! DESIGN
//! ======
//! Separating list state from auth state keeps booking refreshes from
//! re-running identity effects. The list is replaced wholesale on each
//! fetch; there is no client-side cache.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use crate::net::types::Booking;

/// Shared booking list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct BookingsState {
    pub items: Vec<Booking>,
    pub loading: bool,
    pub create_pending: bool,
    pub error: Option<String>,
}
