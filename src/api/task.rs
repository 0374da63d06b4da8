//! Task Endpoints
//!
//! Create, update, fetch and mutate single tasks.

use serde::{Deserialize, Serialize};

use super::{get_json, post_json, Empty, Reply};
use crate::error::ApiError;
use crate::models::{Priority, Task, TaskStatus};

// ========================
// Argument Structs
// ========================

/// Body of `/create_task`; `/update_task` adds `task_id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u32>,
    pub title: String,
    pub description: String,
    pub project_id: u32,
    pub assigned_to: Option<u32>,
    pub priority: Priority,
    pub due_date: Option<String>,
}

#[derive(Serialize)]
struct StatusArgs {
    task_id: u32,
    status: TaskStatus,
}

#[derive(Serialize)]
struct PriorityArgs {
    task_id: u32,
    priority: Priority,
}

#[derive(Serialize)]
struct TaskIdArgs {
    task_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CreatedTask {
    #[serde(default)]
    pub task_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TaskPayload {
    task: Task,
}

// ========================
// Commands
// ========================

pub async fn create_task(form: &TaskForm) -> Result<Reply<CreatedTask>, ApiError> {
    post_json("/create_task", Some(form)).await
}

/// `form.task_id` must be set
pub async fn update_task(form: &TaskForm) -> Result<Reply<Empty>, ApiError> {
    post_json("/update_task", Some(form)).await
}

pub async fn get_task(task_id: u32) -> Result<Task, ApiError> {
    let reply: Reply<TaskPayload> = get_json(&format!("/get_task/{}", task_id)).await?;
    Ok(reply.data.task)
}

pub async fn update_task_status(task_id: u32, status: TaskStatus) -> Result<Reply<Empty>, ApiError> {
    post_json("/update_task_status", Some(&StatusArgs { task_id, status })).await
}

pub async fn update_task_priority(task_id: u32, priority: Priority) -> Result<Reply<Empty>, ApiError> {
    post_json("/update_task_priority", Some(&PriorityArgs { task_id, priority })).await
}

pub async fn delete_task(task_id: u32) -> Result<Reply<Empty>, ApiError> {
    post_json("/delete_task", Some(&TaskIdArgs { task_id })).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_field_names() {
        let form = TaskForm {
            task_id: None,
            title: "Fix bug".into(),
            description: String::new(),
            project_id: 3,
            assigned_to: None,
            priority: Priority::High,
            due_date: None,
        };
        let json: serde_json::Value = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Fix bug",
                "description": "",
                "project_id": 3,
                "assigned_to": null,
                "priority": "high",
                "due_date": null
            })
        );
    }

    #[test]
    fn test_update_body_includes_task_id() {
        let form = TaskForm {
            task_id: Some(8),
            title: "Ship".into(),
            description: "v2".into(),
            project_id: 1,
            assigned_to: Some(4),
            priority: Priority::Low,
            due_date: Some("2024-06-01".into()),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["task_id"], 8);
        assert_eq!(json["assigned_to"], 4);
        assert_eq!(json["due_date"], "2024-06-01");
    }

    #[test]
    fn test_status_body() {
        let json = serde_json::to_value(StatusArgs { task_id: 5, status: TaskStatus::Done }).unwrap();
        assert_eq!(json, serde_json::json!({"task_id": 5, "status": "done"}));
    }

    #[test]
    fn test_get_task_payload() {
        let reply: Reply<TaskPayload> = super::super::decode(
            r#"{"success": true, "task": {"id": 5, "title": "Docs", "description": null,
                "project_id": 2, "assigned_to": 7, "priority": "low", "status": "done",
                "due_date": "2024-02-01", "project_name": "Apollo"}}"#,
        )
        .unwrap();
        assert_eq!(reply.data.task.assigned_to, Some(7));
        assert_eq!(reply.data.task.status, TaskStatus::Done);
    }
}
