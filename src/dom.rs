//! DOM Helpers
//!
//! Thin wrappers over `web_sys` for the few things components need outside
//! the reactive view: document-level listeners, page reload, confirm
//! prompts, local storage, viewport metrics.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Text content of an element by id (used for embedded JSON blobs)
pub fn element_text(id: &str) -> Option<String> {
    element_by_id(id)?.text_content()
}

pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Element an event was dispatched to
pub fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

/// Nearest ancestor-or-self of the event target matching `selector`
pub fn closest_to_target(ev: &web_sys::Event, selector: &str) -> Option<web_sys::Element> {
    event_element(ev)?.closest(selector).ok().flatten()
}

/// True when the event target sits inside an element matching `selector`
pub fn target_within(ev: &web_sys::Event, selector: &str) -> bool {
    closest_to_target(ev, selector).is_some()
}

/// Document-level event source.
///
/// Listeners registered here live for the page lifetime; pages are never
/// torn down without a navigation.
pub struct DocumentEvents;

impl DocumentEvents {
    pub fn on_click(handler: impl FnMut(web_sys::MouseEvent) + 'static) {
        Self::listen("click", handler);
    }

    pub fn on_keydown(handler: impl FnMut(web_sys::KeyboardEvent) + 'static) {
        Self::listen("keydown", handler);
    }

    fn listen<E>(event: &str, handler: impl FnMut(E) + 'static)
    where
        E: wasm_bindgen::convert::FromWasmAbi + 'static,
    {
        let cb = Closure::<dyn FnMut(E)>::new(handler);
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
        cb.forget();
    }
}

/// Window resize listener for the page lifetime
pub fn on_window_resize(handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

pub fn scroll_offset() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (0.0, 0.0);
    };
    (win.scroll_x().unwrap_or(0.0), win.scroll_y().unwrap_or(0.0))
}

pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            log::error!("[DOM] reload failed: {:?}", e);
        }
    }
}

/// Native confirm prompt; a missing window counts as "cancel".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn storage_get(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(key)
        .ok()?
}

pub fn storage_set(key: &str, value: &str) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        if storage.set_item(key, value).is_err() {
            log::warn!("[DOM] could not persist {}", key);
        }
    }
}

/// Suppress body scrolling while a mobile overlay is open
pub fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

/// Apply the theme to `<html data-theme>` and `<body class>`
pub fn apply_theme(theme: &str) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("data-theme", theme);
    }
    if let Some(body) = doc.body() {
        body.set_class_name(theme);
    }
}
