//! Error Types
//!
//! Failures of a server round trip. All of them end the triggering action;
//! callers turn them into an error toast.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch rejected or the body could not be read
    #[error("request failed: {0}")]
    Transport(String),
    /// well-formed response with `success: false`
    #[error("{0}")]
    Rejected(String),
    /// response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_js(value: JsValue) -> Self {
        ApiError::Transport(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }

    /// Transport and decode failures are logged; rejections are expected.
    pub fn should_log(&self) -> bool {
        !matches!(self, ApiError::Rejected(_))
    }

    /// Toast text: the server's message for rejections, `fallback` otherwise.
    pub fn toast_text(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(message) if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Start-up failures reading the server-rendered page
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("no document available")]
    NoDocument,
    #[error("missing #{0} element")]
    MissingElement(&'static str),
    #[error("invalid page data: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_text_prefers_server_message() {
        let e = ApiError::Rejected("Access denied".into());
        assert_eq!(e.toast_text("Error updating task."), "Access denied");
        assert!(!e.should_log());
    }

    #[test]
    fn test_toast_text_falls_back_for_transport() {
        let e = ApiError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(e.toast_text("Error updating task."), "Error updating task.");
        assert!(e.should_log());
    }
}
