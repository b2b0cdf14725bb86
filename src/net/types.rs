//! Wire DTOs for the ride-hailing REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON serializers so deserialization stays
//! lossless. Model decimals (fares, payment amounts) arrive as JSON strings
//! from list/detail endpoints but as bare numbers from a few action
//! responses, so money fields go through a lenient deserializer instead of
//! assuming one encoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Username/password pair submitted to the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Access/refresh token pair issued by `POST /api/token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer token attached to authorized requests.
    pub access: String,
    /// Long-lived token held for a future session; never sent on API calls.
    pub refresh: String,
}

/// Registration payload for `POST /api/users/`.
///
/// The password is write-only server-side and never appears in [`User`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub is_driver: bool,
}

/// An account as returned by `/api/users/me/` and the user collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// Uploaded avatar URL, if any.
    pub profile_picture: Option<String>,
    /// Whether this account also has a driver profile.
    pub is_driver: bool,
    /// ISO 8601 account creation timestamp.
    pub date_joined: String,
}

impl User {
    /// Full display name, falling back to the username when the name
    /// fields are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_owned()
        }
    }
}

/// Vetting state of a driver's background check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundCheckStatus {
    Pending,
    Approved,
    Rejected,
}

/// A driver's vehicle and availability record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub id: i64,
    /// Owning user id.
    pub user: i64,
    pub license_number: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub vehicle_color: String,
    pub license_plate: String,
    pub background_check_status: BackgroundCheckStatus,
    pub is_available: bool,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    /// ISO 8601 timestamp of the last location report, if any.
    pub last_location_update: Option<String>,
}

/// A driver profile annotated with distance from the query point,
/// as returned by the nearby/radius-search endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NearbyDriver {
    #[serde(flatten)]
    pub profile: DriverProfile,
    /// Great-circle distance from the query point in kilometers.
    pub distance: f64,
}

/// Lifecycle state of a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Human-readable label for list views and status pills.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Stable lowercase token used as a CSS modifier.
    pub fn css_token(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A ride booking connecting a rider and a driver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// Rider user id.
    pub user: i64,
    /// Driver user id.
    pub driver: i64,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub pickup_address: String,
    pub destination_latitude: f64,
    pub destination_longitude: f64,
    pub destination_address: String,
    /// ISO 8601 creation timestamp, server-assigned.
    pub booking_time: String,
    /// ISO 8601 requested pickup time.
    pub scheduled_time: String,
    pub status: BookingStatus,
}

/// Payload for creating a booking; time and status are server-assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub driver: i64,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub pickup_address: String,
    pub destination_latitude: f64,
    pub destination_longitude: f64,
    pub destination_address: String,
    pub scheduled_time: String,
}

/// A trip record created once a booking starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    /// Backing booking id.
    pub booking: i64,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Driven distance in kilometers, set on completion.
    pub distance: Option<f64>,
    /// Total fare as a decimal string, set on completion.
    #[serde(default, deserialize_with = "deserialize_opt_decimal")]
    pub total_fare: Option<String>,
}

/// How a payment is settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    MobileMoney,
    Cash,
}

/// Settlement state of a payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// A payment owed for a completed trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    /// Backing trip id.
    pub trip: i64,
    /// Amount as a decimal string.
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: String,
    pub payment_method: PaymentMethod,
    /// Gateway transaction reference, set once processed.
    pub transaction_id: Option<String>,
    pub status: PaymentStatus,
    pub timestamp: String,
}

/// A rider's review of a completed trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub trip: i64,
    /// Reviewing rider user id.
    pub user: i64,
    /// Reviewed driver user id.
    pub driver: i64,
    /// Star rating, 1 through 5.
    pub rating: i32,
    pub comment: Option<String>,
    pub timestamp: String,
}

/// Payload for submitting a review; the rider is taken from the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub trip: i64,
    pub driver: i64,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Subscription tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    Basic,
    Premium,
    Business,
}

/// A rider's subscription period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub user: i64,
    pub plan: SubscriptionPlan,
    /// ISO 8601 date.
    pub start_date: String,
    /// ISO 8601 date.
    pub end_date: String,
    pub is_active: bool,
}

/// Payload for opening a subscription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubscription {
    pub user: i64,
    pub plan: SubscriptionPlan,
    /// ISO 8601 date.
    pub start_date: String,
    /// ISO 8601 date.
    pub end_date: String,
    pub is_active: bool,
}

/// An in-app notification delivered to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user: i64,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub timestamp: String,
    /// Booking this notification refers to, if any.
    pub related_booking: Option<i64>,
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected decimal string or number, got {other}"))),
    }
}

fn deserialize_opt_decimal<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected decimal string or number, got {other}"))),
    }
}
