use super::*;
use crate::net::types::Notification;

fn make_notification(id: i64, is_read: bool) -> Notification {
    Notification {
        id,
        user: 1,
        title: "Trip Started".to_owned(),
        message: "Your trip has started".to_owned(),
        is_read,
        timestamp: "2025-02-01T10:00:00Z".to_owned(),
        related_booking: None,
    }
}

#[test]
fn notifications_state_default_is_empty_and_idle() {
    let state = NotificationsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn unread_count_ignores_read_items() {
    let state = NotificationsState {
        items: vec![
            make_notification(1, false),
            make_notification(2, true),
            make_notification(3, false),
        ],
        loading: false,
        error: None,
    };
    assert_eq!(state.unread_count(), 2);
}
