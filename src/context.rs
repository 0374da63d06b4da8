//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::UiConfig;
use crate::dom;
use crate::error::ApiError;
use crate::models::CurrentUser;
use crate::toast::Toaster;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<UiConfig>,
    pub user: StoredValue<CurrentUser>,
    pub toaster: Toaster,
    pub modals: Modals,
}

impl AppContext {
    pub fn new(config: UiConfig, user: CurrentUser) -> Self {
        let toaster = Toaster::new(&config);
        Self {
            config: StoredValue::new(config),
            user: StoredValue::new(user),
            toaster,
            modals: Modals::new(),
        }
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }

    /// Error toast for a failed round trip
    pub fn report(&self, error: &ApiError, fallback: &str) {
        self.toaster.error(&error.toast_text(fallback));
    }
    /// Full reload after the configured delay, so the toast can be read
    pub fn reload_soon(&self) {
        self.reload_after(self.config.with_value(|c| c.reload_delay_ms));
    }

    pub fn reload_after(&self, delay: u32) {
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            dom::reload_page();
        });
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Dialog overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    Profile,
    CreateProject,
    Task,
    AddMember,
}

/// Modal controller: at most one dialog is open at a time.
///
/// Forms watch `is_open` and reset themselves when their dialog closes, so
/// every close path (button, backdrop, Escape) resets the form.
#[derive(Clone, Copy)]
pub struct Modals {
    open: RwSignal<Option<ModalId>>,
}

impl Modals {
    pub fn new() -> Self {
        Self { open: RwSignal::new(None) }
    }

    pub fn open(&self, id: ModalId) {
        self.open.set(Some(id));
    }

    pub fn close(&self, id: ModalId) {
        if self.open.get_untracked() == Some(id) {
            self.open.set(None);
        }
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.get() == Some(id)
    }
}

impl Default for Modals {
    fn default() -> Self {
        Self::new()
    }
}
