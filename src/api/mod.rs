//! Server API Wrappers
//!
//! Frontend bindings to the server's JSON endpoints, organized by domain.
//! Mutations are `POST` with a JSON body and answer
//! `{success, message, ...}`; reads are `GET` and answer `{success, ...}`.

mod member;
mod message;
mod notification;
mod project;
mod task;
mod theme;

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::UiConfig;
use crate::error::ApiError;

// Re-export all public items
pub use member::*;
pub use message::*;
pub use notification::*;
pub use project::*;
pub use task::*;
pub use theme::*;

static ENDPOINTS: OnceLock<UiConfig> = OnceLock::new();

/// Set the endpoint prefix once at start-up
pub fn set_base(config: &UiConfig) {
    let _ = ENDPOINTS.set(config.clone());
}

fn url(path: &str) -> String {
    match ENDPOINTS.get() {
        Some(config) => config.url(path),
        None => path.to_string(),
    }
}

// ========================
// Response Envelope
// ========================

/// `{success, message, ...payload}`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<Reply<T>, ApiError> {
        if self.success {
            Ok(Reply { message: self.message, data: self.data })
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

/// Successful reply: the server's message and the payload
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub message: String,
    pub data: T,
}

/// Payload of replies that carry nothing besides `success`/`message`
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Empty {}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<Reply<T>, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    envelope.into_result()
}

// ========================
// Transport
// ========================

async fn send(method: &str, path: &str, body: Option<String>) -> Result<String, ApiError> {
    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body.as_deref() {
        opts.set_body(&wasm_bindgen::JsValue::from_str(body));
    }

    let request = web_sys::Request::new_with_str_and_init(&url(path), &opts).map_err(ApiError::from_js)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(ApiError::from_js)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?;
    let response: web_sys::Response = response.dyn_into().map_err(ApiError::from_js)?;

    let text = JsFuture::from(response.text().map_err(ApiError::from_js)?)
        .await
        .map_err(ApiError::from_js)?;
    text.as_string()
        .ok_or_else(|| ApiError::Transport(format!("non-text body from {}", path)))
}

/// Log failures worth a console line, pass the result through
fn trace<T>(path: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        if e.should_log() {
            log::error!("[API] {} failed: {}", path, e);
        }
    }
    result
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<Reply<T>, ApiError> {
    let result = match send("GET", path, None).await {
        Ok(body) => decode(&body),
        Err(e) => Err(e),
    };
    trace(path, result)
}

pub(crate) async fn post_json<B, T>(path: &str, body: Option<&B>) -> Result<Reply<T>, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let payload = match body {
        Some(b) => Some(serde_json::to_string(b)?),
        None => None,
    };
    let result = match send("POST", path, payload).await {
        Ok(body) => decode(&body),
        Err(e) => Err(e),
    };
    trace(path, result)
}

/// POST without the `{success}` envelope (e.g. `/toggle_theme`)
pub(crate) async fn post_raw<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let result = match send("POST", path, None).await {
        Ok(body) => serde_json::from_str(&body).map_err(ApiError::from),
        Err(e) => Err(e),
    };
    trace(path, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Created {
        task_id: u32,
    }

    #[test]
    fn test_decode_success_with_payload() {
        let reply: Reply<Created> =
            decode(r#"{"success": true, "message": "Task created successfully", "task_id": 12}"#).unwrap();
        assert_eq!(reply.message, "Task created successfully");
        assert_eq!(reply.data, Created { task_id: 12 });
    }

    #[test]
    fn test_decode_rejection_carries_message() {
        let err = decode::<Empty>(r#"{"success": false, "message": "Access denied"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Access denied".into()));
    }

    #[test]
    fn test_decode_missing_success_is_rejection() {
        let err = decode::<Empty>(r#"{"message": "Please log in first"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Please log in first".into()));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let err = decode::<Empty>("<!doctype html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
