use super::*;

#[test]
fn next_driver_action_follows_booking_lifecycle() {
    assert_eq!(next_driver_action(BookingStatus::Pending), Some(BookingAction::Accept));
    assert_eq!(next_driver_action(BookingStatus::Accepted), Some(BookingAction::StartTrip));
    assert_eq!(
        next_driver_action(BookingStatus::InProgress),
        Some(BookingAction::CompleteTrip)
    );
}

#[test]
fn next_driver_action_is_none_for_terminal_states() {
    assert_eq!(next_driver_action(BookingStatus::Completed), None);
    assert_eq!(next_driver_action(BookingStatus::Cancelled), None);
}

#[test]
fn booking_action_labels_match_buttons() {
    assert_eq!(BookingAction::Accept.label(), "Accept");
    assert_eq!(BookingAction::StartTrip.label(), "Start Trip");
    assert_eq!(BookingAction::CompleteTrip.label(), "Complete Trip");
}
