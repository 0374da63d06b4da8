//! Notification Bell
//!
//! Badge, dropdown list and settings toggle. The list is fetched once on
//! mount, every `poll_interval_ms` after that for the page lifetime, and
//! again whenever the panel opens or an item is marked read.

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, NotificationFeed};
use crate::components::MenuFamily;
use crate::context::use_app;
use crate::error::ApiError;
use crate::format;
use crate::models::Notification;
use crate::toast::ToastKind;

const MARK_READ_FAILED: &str = "Error marking notifications as read";

/// Toast for a settled list action; `None` when it succeeded without a notice
fn action_toast(outcome: &Result<(), ApiError>, success: Option<&str>) -> Option<(ToastKind, String)> {
    match outcome {
        Ok(()) => success.map(|text| (ToastKind::Success, text.to_string())),
        Err(e) => Some((ToastKind::Error, e.toast_text(MARK_READ_FAILED))),
    }
}

/// Poller state shared by the bell's parts
#[derive(Clone, Copy)]
struct Poller {
    feed: RwSignal<NotificationFeed>,
    enabled: RwSignal<bool>,
    /// Clock for relative times, advanced on every successful fetch
    now: RwSignal<DateTime<Utc>>,
}

impl Poller {
    fn refresh(&self) {
        let feed = self.feed;
        let now = self.now;
        spawn_local(async move {
            match api::get_notifications().await {
                Ok(latest) => {
                    now.set(Utc::now());
                    feed.set(latest);
                }
                // polled reads fail quietly; the client already logged it
                Err(e) => log::debug!("[NOTIFY] refresh skipped: {}", e),
            }
        });
    }

    fn load_settings(&self) {
        let enabled = self.enabled;
        spawn_local(async move {
            if let Ok(settings) = api::get_notification_settings().await {
                enabled.set(settings.notifications_enabled);
            }
        });
    }
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let app = use_app();
    let panel = MenuFamily::<()>::new(".notification-container");
    let poller = Poller {
        feed: RwSignal::new(NotificationFeed::default()),
        enabled: RwSignal::new(true),
        now: RwSignal::new(Utc::now()),
    };

    poller.load_settings();
    poller.refresh();
    let interval_ms = app.config.with_value(|c| c.poll_interval_ms);
    Interval::new(interval_ms, move || poller.refresh()).forget();

    let toggle_panel = move |_| {
        panel.toggle(());
        if panel.is_open(()) {
            poller.refresh();
        }
    };

    let toggle_settings = move |ev: web_sys::Event| {
        let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        spawn_local(async move {
            match api::toggle_notifications().await {
                Ok(settings) => {
                    poller.enabled.set(settings.notifications_enabled);
                    app.toaster.success(if settings.notifications_enabled {
                        "Notifications enabled"
                    } else {
                        "Notifications disabled"
                    });
                }
                Err(e) => {
                    if let Some(input) = input {
                        input.set_checked(poller.enabled.get_untracked());
                    }
                    app.report(&e, "Error updating notification settings");
                }
            }
        });
    };

    let mark_all = move |_| {
        spawn_local(async move {
            let outcome = api::mark_all_notifications_read().await.map(|_| ());
            if outcome.is_ok() {
                poller.refresh();
            }
            if let Some((kind, text)) = action_toast(&outcome, Some("All notifications marked as read")) {
                app.toaster.notify(&text, kind);
            }
        });
    };

    let badge = move || poller.feed.with(|f| format::badge_text(f.unread_count));

    view! {
        <div class="notification-container">
            <button class="notification-btn" on:click=toggle_panel>
                "🔔"
                <span
                    id="notificationBadge"
                    class="notification-badge"
                    style=move || if badge().is_some() { "display: flex;" } else { "display: none;" }
                >
                    {move || badge().unwrap_or_default()}
                </span>
            </button>
            <div id="notificationDropdown" class=move || panel.class("notification-dropdown", ())>
                <div class="notification-header">
                    <h4>"Notifications"</h4>
                    <button class="mark-all-btn" on:click=mark_all>"Mark all read"</button>
                </div>
                <label class="notification-setting">
                    <input
                        type="checkbox"
                        id="notificationToggle"
                        prop:checked=move || poller.enabled.get()
                        on:change=toggle_settings
                    />
                    <span>"Enable notifications"</span>
                </label>
                <div id="notificationList" class="notification-list">
                    <Show
                        when=move || poller.feed.with(|f| !f.notifications.is_empty())
                        fallback=|| view! { <div class="no-notifications">"No notifications yet"</div> }
                    >
                        <For
                            each=move || poller.feed.with(|f| f.notifications.clone())
                            key=|n| (n.id, n.read)
                            children=move |n| view! {
                                <NotificationItem
                                    notification=n
                                    now=poller.now
                                    on_read=Callback::new(move |_| poller.refresh())
                                />
                            }
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NotificationItem(
    notification: Notification,
    now: RwSignal<DateTime<Utc>>,
    on_read: Callback<()>,
) -> impl IntoView {
    let app = use_app();
    let id = notification.id;
    let class = if notification.read { "notification-item" } else { "notification-item unread" };
    let created_at = notification.created_at.clone();
    let when = move || format::relative_since(&created_at, now.get());

    let mark_read = move |_| {
        spawn_local(async move {
            let outcome = api::mark_notification_read(id).await.map(|_| ());
            if outcome.is_ok() {
                on_read.run(());
            }
            if let Some((kind, text)) = action_toast(&outcome, None) {
                app.toaster.notify(&text, kind);
            }
        });
    };

    view! {
        <div class=class on:click=mark_read>
            <div class="notification-title">{notification.title}</div>
            <div class="notification-message">{notification.message}</div>
            <div class="notification-time">{when}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_mark_all_is_reported() {
        let outcome = Err(ApiError::Rejected("Please log in first".into()));
        assert_eq!(
            action_toast(&outcome, Some("All notifications marked as read")),
            Some((ToastKind::Error, "Please log in first".to_string()))
        );
    }

    #[test]
    fn test_failed_mark_read_uses_fallback() {
        let outcome = Err(ApiError::Transport("TypeError: Failed to fetch".into()));
        assert_eq!(action_toast(&outcome, None), Some((ToastKind::Error, MARK_READ_FAILED.to_string())));
    }

    #[test]
    fn test_successful_actions() {
        assert_eq!(action_toast(&Ok(()), None), None);
        assert_eq!(
            action_toast(&Ok(()), Some("All notifications marked as read")),
            Some((ToastKind::Success, "All notifications marked as read".to_string()))
        );
    }
}
