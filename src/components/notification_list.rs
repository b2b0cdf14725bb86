//! Notification panel with per-item and bulk mark-as-read controls.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

/// Notification list; read-state mutations are delegated to the page.
#[component]
pub fn NotificationList(
    notifications: RwSignal<NotificationsState>,
    on_mark_read: Callback<i64>,
    on_mark_all_read: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="notification-panel">
            <header class="notification-panel__header">
                <h2>"Notifications"</h2>
                <span class="notification-panel__unread">
                    {move || {
                        let unread = notifications.get().unread_count();
                        format!("{unread} unread")
                    }}
                </span>
                <button class="btn" on:click=move |_| on_mark_all_read.run(())>
                    "Mark all read"
                </button>
            </header>
            <Show when=move || notifications.get().error.is_some()>
                <p class="notification-panel__error">
                    {move || notifications.get().error.unwrap_or_default()}
                </p>
            </Show>
            <ul class="notification-panel__items">
                {move || {
                    notifications
                        .get()
                        .items
                        .into_iter()
                        .map(|n| {
                            let id = n.id;
                            view! {
                                <li
                                    class="notification-item"
                                    class:notification-item--unread=!n.is_read
                                >
                                    <span class="notification-item__title">{n.title}</span>
                                    <span class="notification-item__message">{n.message}</span>
                                    <span class="notification-item__time">{n.timestamp}</span>
                                    <Show when=move || !n.is_read>
                                        <button
                                            class="btn notification-item__read"
                                            on:click=move |_| on_mark_read.run(id)
                                        >
                                            "Mark read"
                                        </button>
                                    </Show>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
