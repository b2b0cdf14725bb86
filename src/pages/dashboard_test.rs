use super::*;

fn valid_input() -> NewBooking {
    parse_new_booking_input(
        "3",
        ("37.7749", "-122.4194", "1 Market St"),
        ("37.8044", "-122.2712", "Broadway & 14th"),
        "2025-02-01T10:00:00Z",
    )
    .unwrap()
}

#[test]
fn parse_new_booking_input_accepts_valid_fields() {
    let booking = valid_input();
    assert_eq!(booking.driver, 3);
    assert!((booking.pickup_latitude - 37.7749).abs() < f64::EPSILON);
    assert!((booking.destination_longitude - (-122.2712)).abs() < f64::EPSILON);
    assert_eq!(booking.pickup_address, "1 Market St");
    assert_eq!(booking.scheduled_time, "2025-02-01T10:00:00Z");
}

#[test]
fn parse_new_booking_input_rejects_bad_driver_id() {
    let result = parse_new_booking_input(
        "dana",
        ("1", "2", "a"),
        ("3", "4", "b"),
        "2025-02-01T10:00:00Z",
    );
    assert_eq!(result, Err("Enter a driver id."));
}

#[test]
fn parse_new_booking_input_rejects_non_numeric_coordinates() {
    let result = parse_new_booking_input(
        "3",
        ("north", "2", "a"),
        ("3", "4", "b"),
        "2025-02-01T10:00:00Z",
    );
    assert_eq!(result, Err("Pickup coordinates must be numbers."));

    let result = parse_new_booking_input(
        "3",
        ("1", "2", "a"),
        ("3", "west", "b"),
        "2025-02-01T10:00:00Z",
    );
    assert_eq!(result, Err("Destination coordinates must be numbers."));
}

#[test]
fn parse_new_booking_input_requires_addresses_and_time() {
    let result = parse_new_booking_input("3", ("1", "2", "  "), ("3", "4", "b"), "t");
    assert_eq!(result, Err("Enter both addresses."));

    let result = parse_new_booking_input("3", ("1", "2", "a"), ("3", "4", "b"), "   ");
    assert_eq!(result, Err("Enter a pickup time."));
}
