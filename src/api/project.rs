//! Project Endpoints

use serde::{Deserialize, Serialize};

use super::{post_json, Empty, Reply};
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProjectArgs {
    pub name: String,
    pub description: String,
    pub color: String,
}

#[derive(Serialize)]
struct ProjectIdArgs {
    project_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CreatedProject {
    #[serde(default)]
    pub project_id: Option<u32>,
}

pub async fn create_project(args: &CreateProjectArgs) -> Result<Reply<CreatedProject>, ApiError> {
    post_json("/create_project", Some(args)).await
}

pub async fn delete_project(project_id: u32) -> Result<Reply<Empty>, ApiError> {
    post_json("/delete_project", Some(&ProjectIdArgs { project_id })).await
}
