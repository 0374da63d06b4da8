//! UI Configuration
//!
//! Timings and keys used across the interaction layer. The server may embed
//! overrides as JSON in `<script id="app-config" type="application/json">`;
//! anything not given keeps its default.

use serde::Deserialize;

use crate::dom;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix for every endpoint path
    pub api_base: String,
    pub poll_interval_ms: u32,
    pub toast_fade_out_ms: u32,
    pub toast_clear_ms: u32,
    pub mobile_breakpoint_px: f64,
    pub resize_debounce_ms: u32,
    pub delete_animation_ms: u32,
    /// Delay before reloading after create project / add member
    pub reload_delay_ms: u32,
    pub sidebar_storage_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval_ms: 30_000,
            toast_fade_out_ms: 1_850,
            toast_clear_ms: 2_550,
            mobile_breakpoint_px: 768.0,
            resize_debounce_ms: 250,
            delete_animation_ms: 300,
            reload_delay_ms: 1_000,
            sidebar_storage_key: "sidebarCollapsed".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read `#app-config`, falling back to defaults.
    pub fn from_document() -> Self {
        let Some(raw) = dom::element_text("app-config") else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("[CONFIG] ignoring invalid #app-config: {}", e);
                Self::default()
            }
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn is_mobile_width(&self, width: f64) -> bool {
        width <= self.mobile_breakpoint_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg = UiConfig::from_json(r#"{"poll_interval_ms": 5000, "api_base": "/app/"}"#).unwrap();
        assert_eq!(cfg.poll_interval_ms, 5000);
        assert_eq!(cfg.toast_clear_ms, 2550);
        assert_eq!(cfg.url("/get_notifications"), "/app/get_notifications");
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        let cfg = UiConfig::default();
        assert!(cfg.is_mobile_width(768.0));
        assert!(!cfg.is_mobile_width(769.0));
        assert_eq!(cfg.url("/create_task"), "/create_task");
    }
}
