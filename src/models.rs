//! Frontend Models
//!
//! Data structures matching the server's JSON. Field names follow the
//! server verbatim.

use serde::{Deserialize, Serialize};

/// Task status (board column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "in_progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Column heading on the board
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Status button text in the task list
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "📝 To Do",
            TaskStatus::InProgress => "🔄 In Progress",
            TaskStatus::Done => "✅ Done",
        }
    }
}

/// Task priority. The accepted set is enforced by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Task data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_id: Option<u32>,
    #[serde(default)]
    pub assigned_to: Option<u32>,
    #[serde(default)]
    pub assigned_name: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
}

/// Project card data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_project_status")]
    pub status: String,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub task_count: u32,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// Tag chips shown on the card (status first)
    pub fn display_tags(&self) -> Vec<String> {
        std::iter::once(self.status.clone())
            .chain(self.tags.iter().cloned())
            .collect()
    }
}

fn default_color() -> String {
    "blue".to_string()
}

fn default_project_status() -> String {
    "active".to_string()
}

/// Project member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: u32,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "member".to_string()
}

impl Member {
    pub fn name(&self) -> String {
        self.display_name.clone().unwrap_or_else(|| self.email.clone())
    }
}

/// Project chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: u32,
    pub content: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Notification (polled, never created client-side)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    #[serde(default, deserialize_with = "bool_from_int_or_bool")]
    pub read: bool,
    pub created_at: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub project_id: Option<u32>,
    #[serde(default)]
    pub task_id: Option<u32>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub task_title: Option<String>,
}

/// The server stores the read flag as an SQLite integer.
fn bool_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

/// Logged-in user as rendered into the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: u32,
    #[serde(default = "default_display_name")]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_initials")]
    pub initials: String,
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self {
            id: 0,
            display_name: default_display_name(),
            email: String::new(),
            initials: default_initials(),
        }
    }
}

fn default_display_name() -> String {
    "You".to_string()
}

fn default_initials() -> String {
    "U".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults() {
        let task: Task = serde_json::from_str(r#"{"id": 4, "title": "Fix bug"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.assigned_to, None);
    }

    #[test]
    fn test_status_wire_names() {
        let task: Task = serde_json::from_str(
            r#"{"id": 1, "title": "t", "status": "in_progress", "priority": "high", "assigned_to": null}"#,
        )
        .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), r#""in_progress""#);
    }

    #[test]
    fn test_notification_read_flag_from_int() {
        let n: Notification = serde_json::from_str(
            r#"{"id": 9, "title": "Added to Project", "message": "m", "read": 0, "created_at": "2024-05-01 10:00:00", "type": "info"}"#,
        )
        .unwrap();
        assert!(!n.read);
        assert_eq!(n.kind.as_deref(), Some("info"));
    }

    #[test]
    fn test_project_display_tags() {
        let p: Project = serde_json::from_str(r#"{"id": 2, "name": "Apollo", "tags": ["design"]}"#).unwrap();
        assert_eq!(p.display_tags(), vec!["active".to_string(), "design".to_string()]);
        assert_eq!(p.color, "blue");
    }
}
