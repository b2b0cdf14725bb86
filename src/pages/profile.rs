//! Profile page showing the authenticated account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route after sign-in. Re-fetches `/api/users/me/` on entry so the
//! page reflects the server record rather than whatever the startup probe
//! cached, and applies the shared unauthenticated redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(user) = crate::net::api::fetch_current_user().await {
                auth.update(|a| {
                    a.user = Some(user);
                    a.loading = false;
                });
            }
        });
    }

    let on_logout = move |_| {
        crate::util::tokens::clear();
        auth.update(|a| a.user = None);
        crate::util::auth::redirect_to("/login");
    };

    let field = |label: &'static str, value: String| {
        view! {
            <div class="profile-field">
                <span class="profile-field__label">{label}</span>
                <span class="profile-field__value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="profile-page">
            <Show
                when=move || auth.get().user.is_some()
                fallback=move || {
                    view! {
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    }
                }
            >
                {move || {
                    auth.get().user.map(|user| {
                        view! {
                            <div class="profile-card">
                                <h1>{user.display_name()}</h1>
                                <p class="profile-card__subtitle">
                                    {if user.is_driver { "Driver" } else { "Rider" }}
                                </p>
                                {field("Username", user.username.clone())}
                                {field("Email", user.email.clone())}
                                {field("Phone", user.phone_number.clone())}
                                {field("Member since", user.date_joined.clone())}
                                <div class="profile-card__actions">
                                    <a class="btn" href="/">"Dashboard"</a>
                                    <button class="btn btn--danger" on:click=on_logout>
                                        "Logout"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                }}
            </Show>
        </div>
    }
}
