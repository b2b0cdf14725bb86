//! REST API helpers for communicating with the ride-hailing backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with a bearer
//! token from local storage. Server-side (SSR): stubs returning
//! `None`/error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! fetch failures degrade UI behavior without crashing hydration. A missing
//! access token on an authorized call redirects to the login route and
//! fails the call without touching the network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{
    Booking, Credentials, NearbyDriver, NewBooking, NewReview, NewSubscription, NewUser,
    Notification, Payment, PaymentMethod, Review, Subscription, TokenPair, Trip, User,
};

const API_BASE: &str = "/api/";
#[cfg(feature = "hydrate")]
const NOT_AUTHENTICATED: &str = "not authenticated";
#[cfg(not(feature = "hydrate"))]
const SERVER_STUB: &str = "not available on server";

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("register failed: {status}")
}

fn booking_action_endpoint(id: i64, action: &str) -> String {
    endpoint(&format!("bookings/{id}/{action}/"))
}

fn notification_read_endpoint(id: i64) -> String {
    endpoint(&format!("notifications/{id}/mark-as-read/"))
}

fn payment_process_endpoint(id: i64) -> String {
    endpoint(&format!("payments/{id}/process-payment/"))
}

fn trip_endpoint(id: i64) -> String {
    endpoint(&format!("trips/{id}/"))
}

fn driver_query_endpoint(path: &str, latitude: f64, longitude: f64, radius_km: f64) -> String {
    endpoint(&format!(
        "driver-profiles/{path}/?latitude={latitude}&longitude={longitude}&radius={radius_km}"
    ))
}

/// `{"success": true}` acknowledgement used by the action endpoints.
#[derive(Debug, Deserialize)]
pub struct Ack {
    pub success: bool,
}

/// Response from completing a trip; the fare is computed server-side.
#[derive(Debug, Deserialize)]
pub struct CompletedTrip {
    pub success: bool,
    pub total_fare: f64,
}

/// GET an authorized endpoint and decode its JSON body.
///
/// Redirects to the login route and fails without a network round trip
/// when no access token is stored.
#[cfg(feature = "hydrate")]
async fn get_authorized<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let Some(token) = crate::util::tokens::access_token() else {
        crate::util::auth::redirect_to("/login");
        return Err(NOT_AUTHENTICATED.to_owned());
    };
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer_header(&token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(not(feature = "hydrate"))]
async fn get_authorized<T>(url: &str) -> Result<T, String> {
    let _ = url;
    Err(SERVER_STUB.to_owned())
}

/// POST an authorized endpoint with an optional JSON body.
#[cfg(feature = "hydrate")]
async fn post_authorized<T: DeserializeOwned>(
    url: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, String> {
    let Some(token) = crate::util::tokens::access_token() else {
        crate::util::auth::redirect_to("/login");
        return Err(NOT_AUTHENTICATED.to_owned());
    };
    let builder = gloo_net::http::Request::post(url).header("Authorization", &bearer_header(&token));
    let request = match body {
        Some(payload) => builder.json(payload).map_err(|e| e.to_string())?,
        None => builder.build().map_err(|e| e.to_string())?,
    };
    let resp = request.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(not(feature = "hydrate"))]
async fn post_authorized<T>(url: &str, body: Option<&serde_json::Value>) -> Result<T, String> {
    let _ = (url, body);
    Err(SERVER_STUB.to_owned())
}

/// Exchange credentials for a token pair via `POST /api/token/`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the credentials
/// are rejected.
pub async fn login(credentials: &Credentials) -> Result<TokenPair, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("token/"))
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<TokenPair>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(SERVER_STUB.to_owned())
    }
}

/// Create an account via `POST /api/users/`. No token required.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server rejects
/// the registration payload.
pub async fn register(new_user: &NewUser) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("users/"))
            .json(new_user)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_user;
        Err(SERVER_STUB.to_owned())
    }
}

/// Fetch the authenticated account from `/api/users/me/`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    get_authorized::<User>(&endpoint("users/me/")).await.ok()
}

/// List the caller's bookings (riders see their own, drivers theirs).
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn list_bookings() -> Result<Vec<Booking>, String> {
    get_authorized(&endpoint("bookings/")).await
}

/// Create a booking via `POST /api/bookings/`.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn create_booking(new_booking: &NewBooking) -> Result<Booking, String> {
    let payload = serde_json::to_value(new_booking).map_err(|e| e.to_string())?;
    post_authorized(&endpoint("bookings/"), Some(&payload)).await
}

/// Accept a pending booking (driver action).
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn accept_booking(id: i64) -> Result<Ack, String> {
    post_authorized(&booking_action_endpoint(id, "accept"), None).await
}

/// Start the trip for an accepted booking (driver action).
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn start_trip(id: i64) -> Result<Ack, String> {
    post_authorized(&booking_action_endpoint(id, "start-trip"), None).await
}

/// Complete a trip; the server computes the fare and opens a payment.
/// A `None` distance lets the server derive it from the booking route.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn complete_trip(
    id: i64,
    distance_km: Option<f64>,
    payment_method: PaymentMethod,
) -> Result<CompletedTrip, String> {
    let mut payload = serde_json::json!({ "payment_method": payment_method });
    if let Some(distance) = distance_km {
        payload["distance"] = serde_json::json!(distance);
    }
    post_authorized(&booking_action_endpoint(id, "complete-trip"), Some(&payload)).await
}

/// List the caller's trips.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn list_trips() -> Result<Vec<Trip>, String> {
    get_authorized(&endpoint("trips/")).await
}

/// Fetch one trip by id.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn fetch_trip(id: i64) -> Result<Trip, String> {
    get_authorized(&trip_endpoint(id)).await
}

/// List the caller's payments.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn list_payments() -> Result<Vec<Payment>, String> {
    get_authorized(&endpoint("payments/")).await
}

/// Settle a pending payment.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn process_payment(id: i64) -> Result<Ack, String> {
    post_authorized(&payment_process_endpoint(id), None).await
}

/// List the caller's reviews.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn list_reviews() -> Result<Vec<Review>, String> {
    get_authorized(&endpoint("reviews/")).await
}

/// Submit a review for a completed trip.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn create_review(new_review: &NewReview) -> Result<Review, String> {
    let payload = serde_json::to_value(new_review).map_err(|e| e.to_string())?;
    post_authorized(&endpoint("reviews/"), Some(&payload)).await
}

/// List the caller's subscriptions.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn list_subscriptions() -> Result<Vec<Subscription>, String> {
    get_authorized(&endpoint("subscriptions/")).await
}

/// Open a subscription via `POST /api/subscriptions/`.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn create_subscription(new_subscription: &NewSubscription) -> Result<Subscription, String> {
    let payload = serde_json::to_value(new_subscription).map_err(|e| e.to_string())?;
    post_authorized(&endpoint("subscriptions/"), Some(&payload)).await
}

/// List the caller's notifications, newest first.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn list_notifications() -> Result<Vec<Notification>, String> {
    get_authorized(&endpoint("notifications/")).await
}

/// Mark one notification as read.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn mark_notification_read(id: i64) -> Result<Ack, String> {
    post_authorized(&notification_read_endpoint(id), None).await
}

/// Mark every notification as read.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn mark_all_notifications_read() -> Result<Ack, String> {
    post_authorized(&endpoint("notifications/mark-all-as-read/"), None).await
}

/// Find available drivers within `radius_km` of a point.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn nearby_drivers(
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Result<Vec<NearbyDriver>, String> {
    get_authorized(&driver_query_endpoint("nearby", latitude, longitude, radius_km)).await
}

/// Like [`nearby_drivers`] but results come back sorted by distance.
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn drivers_in_radius(
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Result<Vec<NearbyDriver>, String> {
    get_authorized(&driver_query_endpoint("radius-search", latitude, longitude, radius_km)).await
}

/// Report the driver's current location (driver action).
///
/// # Errors
///
/// Returns an error string on auth, network or decode failure.
pub async fn update_driver_location(latitude: f64, longitude: f64) -> Result<Ack, String> {
    let payload = serde_json::json!({ "latitude": latitude, "longitude": longitude });
    post_authorized(&endpoint("driver-profiles/update-location/"), Some(&payload)).await
}
