//! Notification-list state for the dashboard panel.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

/// Shared notification list state, newest first as served by the API.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub loading: bool,
    pub error: Option<String>,
}

impl NotificationsState {
    /// Count of notifications not yet marked read.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }
}
