//! Login page with username/password sign-in and account registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in exchanges credentials for a token pair, stores both tokens in
//! local storage and hard-redirects to the profile route. Failures surface
//! a single fixed message; there is no retry or refresh flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::{Credentials, NewUser};

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
const REGISTERED: &str = "Account created. Sign in with your new credentials.";

fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[allow(clippy::too_many_arguments)]
fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    phone_number: &str,
    is_driver: bool,
) -> Result<NewUser, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Username, email and password are required.");
    }
    Ok(NewUser {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        first_name: first_name.trim().to_owned(),
        last_name: last_name.trim().to_owned(),
        phone_number: phone_number.trim().to_owned(),
        is_driver,
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let reg_username = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let reg_first_name = RwSignal::new(String::new());
    let reg_last_name = RwSignal::new(String::new());
    let reg_phone = RwSignal::new(String::new());
    let reg_is_driver = RwSignal::new(false);

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(c) => c,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&credentials).await {
                Ok(tokens) => {
                    crate::util::tokens::store(&tokens);
                    crate::util::auth::redirect_to("/profile");
                }
                Err(e) => {
                    log::warn!("login rejected: {e}");
                    info.set(LOGIN_FAILED.to_owned());
                    busy.set(false);
                }
            }
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let new_user = match validate_register_input(
            &reg_username.get(),
            &reg_email.get(),
            &reg_password.get(),
            &reg_first_name.get(),
            &reg_last_name.get(),
            &reg_phone.get(),
            reg_is_driver.get(),
        ) {
            Ok(u) => u,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&new_user).await {
                Ok(user) => {
                    username.set(user.username);
                    password.set(String::new());
                    info.set(REGISTERED.to_owned());
                }
                Err(e) => info.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"RideShare"</h1>
                <p class="login-card__subtitle">"Sign In"</p>
                <form class="login-form" on:submit=on_sign_in>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" id="login-error">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"New here? Create an account"</p>
                <form class="login-form" on:submit=on_register>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || reg_username.get()
                        on:input=move |ev| reg_username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || reg_email.get()
                        on:input=move |ev| reg_email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || reg_password.get()
                        on:input=move |ev| reg_password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || reg_first_name.get()
                        on:input=move |ev| reg_first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || reg_last_name.get()
                        on:input=move |ev| reg_last_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Phone number"
                        prop:value=move || reg_phone.get()
                        on:input=move |ev| reg_phone.set(event_target_value(&ev))
                    />
                    <label class="login-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || reg_is_driver.get()
                            on:change=move |ev| reg_is_driver.set(event_target_checked(&ev))
                        />
                        "I want to drive"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
            </div>
        </div>
    }
}
