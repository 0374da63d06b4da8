//! Theme Endpoint

use serde::Deserialize;

use super::post_raw;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeReply {
    pub theme: String,
}

/// Flip the session theme; the reply has no `success` flag
pub async fn toggle_theme() -> Result<ThemeReply, ApiError> {
    post_raw("/toggle_theme").await
}
