//! Card component for booking list items on the dashboard.
//!
//! DESIGN
//! ======
//! Presentation only: the card reports the driver action the user picked
//! through a callback and leaves the API call and list refresh to the page.

#[cfg(test)]
#[path = "booking_card_test.rs"]
mod booking_card_test;

use leptos::prelude::*;

use crate::net::types::{Booking, BookingStatus};

/// Driver-side lifecycle action available on a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingAction {
    Accept,
    StartTrip,
    CompleteTrip,
}

impl BookingAction {
    /// Button label for the action.
    pub fn label(self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::StartTrip => "Start Trip",
            Self::CompleteTrip => "Complete Trip",
        }
    }
}

/// The driver action applicable to a booking in `status`, if any.
pub fn next_driver_action(status: BookingStatus) -> Option<BookingAction> {
    match status {
        BookingStatus::Pending => Some(BookingAction::Accept),
        BookingStatus::Accepted => Some(BookingAction::StartTrip),
        BookingStatus::InProgress => Some(BookingAction::CompleteTrip),
        BookingStatus::Completed | BookingStatus::Cancelled => None,
    }
}

/// A card showing one booking's route, schedule and status.
#[component]
pub fn BookingCard(
    booking: Booking,
    #[prop(optional)] is_driver: bool,
    #[prop(optional)] on_action: Option<Callback<(i64, BookingAction)>>,
) -> impl IntoView {
    let id = booking.id;
    let status = booking.status;
    let action = if is_driver { next_driver_action(status) } else { None };
    let status_class = format!("booking-card__status booking-card__status--{}", status.css_token());

    view! {
        <div class="booking-card">
            <div class="booking-card__route">
                <span class="booking-card__pickup">{booking.pickup_address}</span>
                <span class="booking-card__arrow" aria-hidden="true">"to"</span>
                <span class="booking-card__destination">{booking.destination_address}</span>
            </div>
            <span class="booking-card__scheduled">{booking.scheduled_time}</span>
            <span class=status_class>{status.label()}</span>
            {action.map(|action| {
                view! {
                    <button
                        class="btn booking-card__action"
                        on:click=move |_| {
                            if let Some(on_action) = on_action {
                                on_action.run((id, action));
                            }
                        }
                    >
                        {action.label()}
                    </button>
                }
            })}
        </div>
    }
}
