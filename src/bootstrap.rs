//! Page Bootstrap
//!
//! The server renders each page's data as JSON into
//! `<script id="page-data" type="application/json">`, tagged by `page`.

use serde::Deserialize;

use crate::dom;
use crate::error::BootstrapError;
use crate::models::{CurrentUser, Member, Message, Project, Task};
use crate::toast::ToastKind;

pub const PAGE_DATA_ID: &str = "page-data";

/// Server flash message, replayed as a toast on load
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Flash {
    pub message: String,
    #[serde(default)]
    pub kind: ToastKind,
}

/// Fields every page carries
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shell {
    #[serde(default)]
    pub user: CurrentUser,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub flashes: Vec<Flash>,
}

fn default_theme() -> String {
    "dark".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Dashboard {
        #[serde(default)]
        projects: Vec<Project>,
    },
    ProjectDetail {
        project: Project,
        #[serde(default)]
        tasks: Vec<Task>,
        #[serde(default)]
        members: Vec<Member>,
        #[serde(default)]
        messages: Vec<Message>,
    },
    MyTasks {
        #[serde(default)]
        tasks: Vec<Task>,
    },
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Dashboard { .. } => "dashboard",
            Page::ProjectDetail { .. } => "project_detail",
            Page::MyTasks { .. } => "my_tasks",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    pub shell: Shell,
    pub page: Page,
}

impl PageData {
    pub fn from_json(raw: &str) -> Result<Self, BootstrapError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let shell = Shell::deserialize(&value)?;
        let page = Page::deserialize(&value)?;
        Ok(Self { shell, page })
    }
}

pub fn load_page() -> Result<PageData, BootstrapError> {
    if web_sys::window().and_then(|w| w.document()).is_none() {
        return Err(BootstrapError::NoDocument);
    }
    let raw = dom::element_text(PAGE_DATA_ID).ok_or(BootstrapError::MissingElement(PAGE_DATA_ID))?;
    PageData::from_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_page() {
        let data = PageData::from_json(
            r#"{
                "page": "dashboard",
                "user": {"id": 1, "display_name": "Ada", "email": "ada@gmail.com", "initials": "A"},
                "theme": "light",
                "flashes": [{"message": "Welcome back!", "kind": "success"}],
                "projects": [{"id": 3, "name": "Apollo"}]
            }"#,
        )
        .unwrap();
        assert_eq!(data.shell.theme, "light");
        assert_eq!(data.shell.user.display_name, "Ada");
        assert_eq!(data.shell.flashes.len(), 1);
        match data.page {
            Page::Dashboard { projects } => assert_eq!(projects[0].name, "Apollo"),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_project_detail_page() {
        let data = PageData::from_json(
            r#"{
                "page": "project_detail",
                "project": {"id": 7, "name": "Site"},
                "tasks": [{"id": 1, "title": "Wireframes", "status": "done"}],
                "members": [{"user_id": 2, "email": "bo@gmail.com", "role": "owner"}]
            }"#,
        )
        .unwrap();
        assert_eq!(data.shell.theme, "dark");
        assert_eq!(data.shell.user.initials, "U");
        match data.page {
            Page::ProjectDetail { project, tasks, members, messages } => {
                assert_eq!(project.id, 7);
                assert_eq!(tasks.len(), 1);
                assert_eq!(members[0].name(), "bo@gmail.com");
                assert!(messages.is_empty());
            }
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_flash_kind_defaults_to_success() {
        let data = PageData::from_json(
            r#"{"page": "my_tasks", "flashes": [{"message": "Saved"}, {"message": "Nope", "kind": "error"}]}"#,
        )
        .unwrap();
        assert_eq!(data.shell.flashes[0].kind, ToastKind::Success);
        assert_eq!(data.shell.flashes[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_unknown_page_is_invalid() {
        let err = PageData::from_json(r#"{"page": "settings"}"#).unwrap_err();
        assert!(matches!(err, BootstrapError::Invalid(_)));
    }
}
