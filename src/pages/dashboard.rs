//! Dashboard page listing bookings and notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Loads bookings and notifications over the
//! REST API on entry, re-polls notifications on an interval, and hosts the
//! create-booking dialog plus driver-side booking actions.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::booking_card::{BookingAction, BookingCard};
use crate::components::notification_list::NotificationList;
use crate::net::types::NewBooking;
#[cfg(feature = "hydrate")]
use crate::net::types::PaymentMethod;
use crate::state::auth::AuthState;
use crate::state::bookings::BookingsState;
use crate::state::notifications::NotificationsState;
use crate::util::auth::install_unauth_redirect;

#[cfg(feature = "hydrate")]
const NOTIFICATION_POLL_SECS: u64 = 30;

/// Parse the create-booking dialog inputs into a request payload.
fn parse_new_booking_input(
    driver: &str,
    pickup: (&str, &str, &str),
    destination: (&str, &str, &str),
    scheduled_time: &str,
) -> Result<NewBooking, &'static str> {
    let Ok(driver) = driver.trim().parse::<i64>() else {
        return Err("Enter a driver id.");
    };
    let (pickup_lat, pickup_lng, pickup_address) = pickup;
    let (dest_lat, dest_lng, dest_address) = destination;
    let (Ok(pickup_latitude), Ok(pickup_longitude)) =
        (pickup_lat.trim().parse::<f64>(), pickup_lng.trim().parse::<f64>())
    else {
        return Err("Pickup coordinates must be numbers.");
    };
    let (Ok(destination_latitude), Ok(destination_longitude)) =
        (dest_lat.trim().parse::<f64>(), dest_lng.trim().parse::<f64>())
    else {
        return Err("Destination coordinates must be numbers.");
    };
    let pickup_address = pickup_address.trim();
    let dest_address = dest_address.trim();
    let scheduled_time = scheduled_time.trim();
    if pickup_address.is_empty() || dest_address.is_empty() {
        return Err("Enter both addresses.");
    }
    if scheduled_time.is_empty() {
        return Err("Enter a pickup time.");
    }
    Ok(NewBooking {
        driver,
        pickup_latitude,
        pickup_longitude,
        pickup_address: pickup_address.to_owned(),
        destination_latitude,
        destination_longitude,
        destination_address: dest_address.to_owned(),
        scheduled_time: scheduled_time.to_owned(),
    })
}

#[cfg(feature = "hydrate")]
fn refresh_bookings(bookings: RwSignal<BookingsState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::list_bookings().await {
            Ok(items) => bookings.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(e) => bookings.update(|s| {
                s.loading = false;
                s.error = Some(e);
            }),
        }
    });
}

#[cfg(feature = "hydrate")]
fn refresh_notifications(notifications: RwSignal<NotificationsState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::list_notifications().await {
            Ok(items) => notifications.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(e) => notifications.update(|s| {
                s.loading = false;
                s.error = Some(e);
            }),
        }
    });
}

/// Dashboard page: bookings with driver actions plus the notification
/// panel. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let bookings = expect_context::<RwSignal<BookingsState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    #[cfg(feature = "hydrate")]
    {
        bookings.update(|s| s.loading = true);
        notifications.update(|s| s.loading = true);
        refresh_bookings(bookings);
        refresh_notifications(notifications);

        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(NOTIFICATION_POLL_SECS))
                    .await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_notifications(notifications);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Create-booking dialog state.
    let show_create = RwSignal::new(false);
    let on_create = move |_| show_create.set(true);
    let on_create_cancel = Callback::new(move |()| show_create.set(false));

    let on_booking_action = Callback::new(move |(id, action): (i64, BookingAction)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = match action {
                    BookingAction::Accept => crate::net::api::accept_booking(id).await.map(|_| ()),
                    BookingAction::StartTrip => crate::net::api::start_trip(id).await.map(|_| ()),
                    BookingAction::CompleteTrip => {
                        crate::net::api::complete_trip(id, None, PaymentMethod::CreditCard)
                            .await
                            .map(|_| ())
                    }
                };
                if let Err(e) = result {
                    bookings.update(|s| s.error = Some(e));
                }
                refresh_bookings(bookings);
                refresh_notifications(notifications);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, action);
        }
    });

    let on_mark_read = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::mark_notification_read(id).await {
                    notifications.update(|s| s.error = Some(e));
                }
                refresh_notifications(notifications);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_mark_all_read = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::mark_all_notifications_read().await {
                    notifications.update(|s| s.error = Some(e));
                }
                refresh_notifications(notifications);
            });
        }
    });

    let on_logout = move |_| {
        crate::util::tokens::clear();
        auth.update(|a| a.user = None);
        crate::util::auth::redirect_to("/login");
    };

    let self_name = move || {
        auth.get()
            .user
            .map_or_else(|| "me".to_owned(), |user| user.display_name())
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Rides"</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    <button class="btn toolbar__new-booking" on:click=on_create>
                        "+ New Booking"
                    </button>

                    <span class="toolbar__spacer"></span>

                    <a class="toolbar__self" href="/profile">
                        {self_name}
                    </a>

                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <div class="dashboard-page__grid">
                    <Show when=move || bookings.get().error.is_some()>
                        <p class="dashboard-page__error">
                            {move || bookings.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <Show
                        when=move || !bookings.get().loading
                        fallback=move || view! { <p>"Loading bookings..."</p> }
                    >
                        <div class="dashboard-page__cards">
                            {move || {
                                let is_driver = auth.get().is_driver();
                                bookings
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|b| {
                                        view! {
                                            <BookingCard
                                                booking=b
                                                is_driver=is_driver
                                                on_action=on_booking_action
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>

                    <NotificationList
                        notifications=notifications
                        on_mark_read=on_mark_read
                        on_mark_all_read=on_mark_all_read
                    />
                </div>
                <Show when=move || show_create.get()>
                    <NewBookingDialog on_cancel=on_create_cancel bookings=bookings />
                </Show>
            </div>
        </Show>
    }
}

/// Modal dialog for creating a booking.
#[component]
fn NewBookingDialog(on_cancel: Callback<()>, bookings: RwSignal<BookingsState>) -> impl IntoView {
    let driver = RwSignal::new(String::new());
    let pickup_lat = RwSignal::new(String::new());
    let pickup_lng = RwSignal::new(String::new());
    let pickup_address = RwSignal::new(String::new());
    let dest_lat = RwSignal::new(String::new());
    let dest_lng = RwSignal::new(String::new());
    let dest_address = RwSignal::new(String::new());
    let scheduled_time = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let parsed = parse_new_booking_input(
            &driver.get(),
            (&pickup_lat.get(), &pickup_lng.get(), &pickup_address.get()),
            (&dest_lat.get(), &dest_lng.get(), &dest_address.get()),
            &scheduled_time.get(),
        );
        let new_booking = match parsed {
            Ok(b) => b,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        bookings.update(|s| s.create_pending = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_booking(&new_booking).await {
                Ok(_) => {
                    bookings.update(|s| s.create_pending = false);
                    refresh_bookings(bookings);
                }
                Err(e) => bookings.update(|s| {
                    s.create_pending = false;
                    s.error = Some(e);
                }),
            }
        });
        on_cancel.run(());
    });

    let text_input = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Booking"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__danger">{move || error.get()}</p>
                </Show>
                {text_input("Driver Id", driver)}
                {text_input("Pickup Latitude", pickup_lat)}
                {text_input("Pickup Longitude", pickup_lng)}
                {text_input("Pickup Address", pickup_address)}
                {text_input("Destination Latitude", dest_lat)}
                {text_input("Destination Longitude", dest_lng)}
                {text_input("Destination Address", dest_address)}
                {text_input("Pickup Time (ISO 8601)", scheduled_time)}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Book"
                    </button>
                </div>
            </div>
        </div>
    }
}
