//! Project Member Endpoints

use serde::Serialize;

use super::{post_json, Empty, Reply};
use crate::error::ApiError;

#[derive(Serialize)]
struct AddMemberArgs<'a> {
    project_id: u32,
    email: &'a str,
}

pub async fn add_project_member(project_id: u32, email: &str) -> Result<Reply<Empty>, ApiError> {
    post_json("/add_project_member", Some(&AddMemberArgs { project_id, email })).await
}
