//! Message Endpoints

use serde::Serialize;

use super::{post_json, Empty, Reply};
use crate::error::ApiError;

#[derive(Serialize)]
struct SendMessageArgs<'a> {
    project_id: u32,
    content: &'a str,
}

pub async fn send_message(project_id: u32, content: &str) -> Result<Reply<Empty>, ApiError> {
    post_json("/send_message", Some(&SendMessageArgs { project_id, content })).await
}
