use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Nguyen".to_owned(),
        phone_number: "+15550100".to_owned(),
        profile_picture: None,
        is_driver: false,
        date_joined: "2025-01-15T08:30:00Z".to_owned(),
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn display_name_joins_first_and_last() {
    assert_eq!(make_user().display_name(), "Alice Nguyen");
}

#[test]
fn display_name_falls_back_to_username_when_blank() {
    let mut user = make_user();
    user.first_name = String::new();
    user.last_name = "  ".to_owned();
    assert_eq!(user.display_name(), "alice");
}

#[test]
fn new_user_serializes_password_for_registration() {
    let new_user = NewUser {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "hunter2".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        phone_number: "+15550199".to_owned(),
        is_driver: true,
    };
    let value = serde_json::to_value(&new_user).unwrap();
    assert_eq!(value["password"], "hunter2");
    assert_eq!(value["is_driver"], true);
}

// =============================================================
// BookingStatus
// =============================================================

#[test]
fn booking_status_uses_snake_case_on_the_wire() {
    assert_eq!(serde_json::to_string(&BookingStatus::InProgress).unwrap(), "\"in_progress\"");
    assert_eq!(
        serde_json::from_str::<BookingStatus>("\"cancelled\"").unwrap(),
        BookingStatus::Cancelled
    );
}

#[test]
fn booking_status_labels_are_human_readable() {
    assert_eq!(BookingStatus::Pending.label(), "Pending");
    assert_eq!(BookingStatus::InProgress.label(), "In Progress");
}

#[test]
fn booking_status_css_tokens_are_kebab_case() {
    assert_eq!(BookingStatus::InProgress.css_token(), "in-progress");
    assert_eq!(BookingStatus::Completed.css_token(), "completed");
}

// =============================================================
// Payment enums
// =============================================================

#[test]
fn payment_method_uses_snake_case_on_the_wire() {
    assert_eq!(serde_json::to_string(&PaymentMethod::CreditCard).unwrap(), "\"credit_card\"");
    assert_eq!(
        serde_json::from_str::<PaymentMethod>("\"mobile_money\"").unwrap(),
        PaymentMethod::MobileMoney
    );
}

// =============================================================
// Decimal leniency
// =============================================================

#[test]
fn trip_total_fare_accepts_decimal_string() {
    let trip: Trip = serde_json::from_value(serde_json::json!({
        "id": 4,
        "booking": 9,
        "start_time": "2025-02-01T10:00:00Z",
        "end_time": "2025-02-01T10:40:00Z",
        "distance": 12.5,
        "total_fare": "30.42"
    }))
    .unwrap();
    assert_eq!(trip.total_fare.as_deref(), Some("30.42"));
}

#[test]
fn trip_total_fare_accepts_bare_number() {
    let trip: Trip = serde_json::from_value(serde_json::json!({
        "id": 4,
        "booking": 9,
        "start_time": null,
        "end_time": null,
        "distance": null,
        "total_fare": 30.42
    }))
    .unwrap();
    assert_eq!(trip.total_fare.as_deref(), Some("30.42"));
}

#[test]
fn trip_total_fare_tolerates_null_and_missing() {
    let with_null: Trip = serde_json::from_value(serde_json::json!({
        "id": 4,
        "booking": 9,
        "start_time": null,
        "end_time": null,
        "distance": null,
        "total_fare": null
    }))
    .unwrap();
    assert_eq!(with_null.total_fare, None);

    let missing: Trip = serde_json::from_value(serde_json::json!({
        "id": 4,
        "booking": 9,
        "start_time": null,
        "end_time": null,
        "distance": null
    }))
    .unwrap();
    assert_eq!(missing.total_fare, None);
}

#[test]
fn payment_amount_accepts_string_or_number() {
    let base = serde_json::json!({
        "id": 2,
        "trip": 4,
        "amount": "18.00",
        "payment_method": "cash",
        "transaction_id": null,
        "status": "pending",
        "timestamp": "2025-02-01T10:41:00Z"
    });
    let payment: Payment = serde_json::from_value(base.clone()).unwrap();
    assert_eq!(payment.amount, "18.00");

    let mut numeric = base;
    numeric["amount"] = serde_json::json!(18.5);
    let payment: Payment = serde_json::from_value(numeric).unwrap();
    assert_eq!(payment.amount, "18.5");
}

// =============================================================
// NearbyDriver flatten
// =============================================================

#[test]
fn nearby_driver_flattens_profile_with_distance() {
    let nearby: NearbyDriver = serde_json::from_value(serde_json::json!({
        "id": 11,
        "user": 3,
        "license_number": "D-4431",
        "vehicle_make": "Toyota",
        "vehicle_model": "Prius",
        "vehicle_year": 2021,
        "vehicle_color": "blue",
        "license_plate": "7ABC123",
        "background_check_status": "approved",
        "is_available": true,
        "current_latitude": 37.78,
        "current_longitude": -122.41,
        "last_location_update": "2025-02-01T09:59:00Z",
        "distance": 1.27
    }))
    .unwrap();
    assert_eq!(nearby.profile.vehicle_make, "Toyota");
    assert_eq!(nearby.profile.background_check_status, BackgroundCheckStatus::Approved);
    assert!((nearby.distance - 1.27).abs() < f64::EPSILON);
}

// =============================================================
// Notification
// =============================================================

#[test]
fn notification_deserializes_with_optional_booking() {
    let notification: Notification = serde_json::from_value(serde_json::json!({
        "id": 5,
        "user": 1,
        "title": "Booking Accepted",
        "message": "Your booking has been accepted by Dana Cole",
        "is_read": false,
        "timestamp": "2025-02-01T09:00:00Z",
        "related_booking": 9
    }))
    .unwrap();
    assert_eq!(notification.related_booking, Some(9));
    assert!(!notification.is_read);
}

// =============================================================
// TokenPair
// =============================================================

#[test]
fn token_pair_deserializes_from_token_endpoint_shape() {
    let tokens: TokenPair = serde_json::from_value(serde_json::json!({
        "access": "header.payload.sig",
        "refresh": "header.payload2.sig2"
    }))
    .unwrap();
    assert_eq!(tokens.access, "header.payload.sig");
    assert_eq!(tokens.refresh, "header.payload2.sig2");
}
