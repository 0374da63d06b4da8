//! Page Layout
//!
//! Sidebar, header and main content area shared by every page. Owns the
//! sidebar's responsive state.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::{NotificationBell, ProfileMenu, ThemeToggle};
use crate::context::use_app;
use crate::dom::{self, DocumentEvents};
use crate::sidebar::SidebarState;

/// Sidebar navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    MyTasks,
    Team,
}

impl NavItem {
    const ALL: [NavItem; 3] = [NavItem::Dashboard, NavItem::MyTasks, NavItem::Team];

    fn href(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "/dashboard",
            NavItem::MyTasks => "/my_tasks",
            NavItem::Team => "/team",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "📊 Dashboard",
            NavItem::MyTasks => "✅ My Tasks",
            NavItem::Team => "👥 Team",
        }
    }
}

#[component]
pub fn Layout(
    #[prop(into)] title: String,
    active: NavItem,
    #[prop(into)] theme: String,
    children: Children,
) -> impl IntoView {
    let app = use_app();
    let config = app.config();
    let storage_key = config.sidebar_storage_key.clone();

    let is_mobile = config.is_mobile_width(dom::viewport_size().0);
    let saved = dom::storage_get(&storage_key);
    let state = RwSignal::new(SidebarState::initial(is_mobile, saved.as_deref()));

    Effect::new(move |_| {
        dom::set_body_scroll_locked(state.with(|s| s.scroll_locked()));
    });

    // Re-evaluate the breakpoint once resizing settles
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let debounce_ms = config.resize_debounce_ms;
    let breakpoint = config.clone();
    dom::on_window_resize(move |_| {
        let breakpoint = breakpoint.clone();
        let timeout = Timeout::new(debounce_ms, move || {
            let mobile = breakpoint.is_mobile_width(dom::viewport_size().0);
            state.update(|s| s.resize(mobile));
        });
        // dropping the previous Timeout cancels it
        pending.borrow_mut().replace(timeout);
    });

    DocumentEvents::on_keydown(move |ev| {
        if ev.key() == "Escape" && state.with_untracked(|s| s.overlay_visible()) {
            state.update(|s| s.dismiss());
        }
    });

    DocumentEvents::on_click(move |ev| {
        let outside = !dom::target_within(&ev, ".sidebar") && !dom::target_within(&ev, "#hamburger-menu");
        if outside && state.with_untracked(|s| s.overlay_visible()) {
            state.update(|s| s.dismiss());
        }
    });

    let toggle = move |_: web_sys::MouseEvent| {
        if let Some(value) = state.try_update(|s| s.toggle()).flatten() {
            dom::storage_set(&storage_key, value);
        }
    };
    let dismiss = move |_: web_sys::MouseEvent| state.update(|s| s.dismiss());

    view! {
        <div class="app-layout">
            <nav class=move || state.with(|s| s.sidebar_class())>
                <div class="sidebar-header">
                    <span class="logo">"Synergy"</span>
                </div>
                <ul class="nav-list">
                    {NavItem::ALL.iter().map(|item| {
                        let item = *item;
                        view! {
                            <li>
                                <a
                                    href=item.href()
                                    class=if item == active { "nav-item active" } else { "nav-item" }
                                    on:click=dismiss
                                >
                                    {item.label()}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
                <a href="/logout" class="nav-item logout">"🚪 Logout"</a>
            </nav>

            <div
                class=move || if state.with(|s| s.overlay_visible()) { "sidebar-overlay show" } else { "sidebar-overlay" }
                on:click=dismiss
            ></div>

            <div class=move || state.with(|s| s.main_class())>
                <header class="top-header">
                    <button
                        id="hamburger-menu"
                        class=move || if state.with(|s| s.trigger_active()) { "hamburger-btn active" } else { "hamburger-btn" }
                        on:click=toggle
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <h1 class="page-title">{title}</h1>
                    <div class="header-actions">
                        <ThemeToggle theme=theme />
                        <NotificationBell />
                        <ProfileMenu />
                    </div>
                </header>
                <main class="page-body">{children()}</main>
            </div>
        </div>
    }
}
