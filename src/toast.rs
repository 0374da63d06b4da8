//! Toast Notifier
//!
//! One shared status element. Each call replaces text and kind, enters
//! immediately, starts fading out at `toast_fade_out_ms` and clears at
//! `toast_clear_ms`. A newer call pre-empts the pending steps of an older
//! one; there is no queue.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::config::UiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Error,
    #[default]
    #[serde(other)]
    Success,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Exiting,
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastState {
    pub text: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
    /// Bumped on every `show`; timers carry the value they were armed with
    pub generation: u64,
}

impl Default for ToastState {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: ToastKind::Success,
            phase: ToastPhase::Cleared,
            generation: 0,
        }
    }
}

impl ToastState {
    /// Returns the generation the follow-up timers must present
    pub fn show(&mut self, text: &str, kind: ToastKind) -> u64 {
        self.generation += 1;
        self.text = text.to_string();
        self.kind = kind;
        self.phase = ToastPhase::Entering;
        self.generation
    }

    pub fn begin_exit(&mut self, generation: u64) {
        if generation == self.generation && self.phase == ToastPhase::Entering {
            self.phase = ToastPhase::Exiting;
        }
    }

    pub fn clear(&mut self, generation: u64) {
        if generation == self.generation {
            self.text.clear();
            self.phase = ToastPhase::Cleared;
        }
    }

    pub fn class(&self) -> String {
        match self.phase {
            ToastPhase::Entering => format!("toast fade-in {}", self.kind.as_str()),
            ToastPhase::Exiting => format!("toast fade-out {}", self.kind.as_str()),
            ToastPhase::Cleared => "toast".to_string(),
        }
    }
}

/// Handle to the shared toast, provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    pub state: RwSignal<ToastState>,
    fade_out_ms: u32,
    clear_ms: u32,
}

impl Toaster {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
            fade_out_ms: config.toast_fade_out_ms,
            clear_ms: config.toast_clear_ms.max(config.toast_fade_out_ms),
        }
    }

    pub fn notify(&self, message: &str, kind: ToastKind) {
        self.notify_for(message, kind, self.fade_out_ms);
    }

    /// Like `notify`, holding the message for `hold_ms` before fading
    pub fn notify_for(&self, message: &str, kind: ToastKind, hold_ms: u32) {
        let generation = self
            .state
            .try_update(|s| s.show(message, kind))
            .unwrap_or_default();
        let state = self.state;
        let fade_out_ms = hold_ms;
        let rest_ms = self.clear_ms - self.fade_out_ms;
        spawn_local(async move {
            TimeoutFuture::new(fade_out_ms).await;
            state.update(|s| s.begin_exit(generation));
            TimeoutFuture::new(rest_ms).await;
            state.update(|s| s.clear(generation));
        });
    }

    pub fn success(&self, message: &str) {
        self.notify(message, ToastKind::Success);
    }

    pub fn error(&self, message: &str) {
        self.notify(message, ToastKind::Error);
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// The singleton status element
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let state = toaster.state;

    view! {
        <div id="toast-msg" class=move || state.with(|s| s.class())>
            {move || state.with(|s| s.text.clone())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_schedule() {
        let mut s = ToastState::default();
        let g = s.show("Saved", ToastKind::Success);
        assert_eq!(s.class(), "toast fade-in success");
        s.begin_exit(g);
        assert_eq!(s.class(), "toast fade-out success");
        s.clear(g);
        assert_eq!(s.class(), "toast");
        assert_eq!(s.text, "");
    }

    #[test]
    fn test_second_call_preempts_first_clear() {
        let mut s = ToastState::default();
        let first = s.show("one", ToastKind::Success);
        let second = s.show("two", ToastKind::Error);
        // first call's timers fire while the second is showing
        s.begin_exit(first);
        s.clear(first);
        assert_eq!(s.class(), "toast fade-in error");
        assert_eq!(s.text, "two");
        s.begin_exit(second);
        s.clear(second);
        assert_eq!(s.class(), "toast");
        assert_eq!(s.text, "");
    }

    #[test]
    fn test_flash_kind_parsing() {
        let k: ToastKind = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(k, ToastKind::Error);
        let k: ToastKind = serde_json::from_str(r#""info""#).unwrap();
        assert_eq!(k, ToastKind::Success);
        let k: ToastKind = serde_json::from_str(r#""success""#).unwrap();
        assert_eq!(k, ToastKind::Success);
        assert_eq!(ToastKind::default(), ToastKind::Success);
    }
}
