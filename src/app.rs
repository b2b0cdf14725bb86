//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, profile::ProfilePage};
use crate::state::{auth::AuthState, bookings::BookingsState, notifications::NotificationsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, runs the startup logged-in check and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let bookings = RwSignal::new(BookingsState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(auth);
    provide_context(bookings);
    provide_context(notifications);

    // Startup check: a stored access token means a session may exist, so
    // probe the profile endpoint before route guards settle.
    #[cfg(feature = "hydrate")]
    {
        if crate::util::tokens::is_logged_in() {
            auth.update(|a| a.loading = true);
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                if user.is_none() {
                    log::info!("stored token rejected, signed out");
                }
                auth.update(|a| {
                    a.user = user;
                    a.loading = false;
                });
            });
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/rideshare-client.css"/>
        <Title text="RideShare"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
