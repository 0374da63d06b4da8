//! Task Board Model
//!
//! Pure operations over the task list the board and list views render.
//! Column counts and header stats are derived, never stored.

use leptos_dragdrop::ZoneMove;

use crate::models::{Priority, Task, TaskStatus};

/// Tasks of one column, in list order
pub fn column(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks.iter().filter(|t| t.status == status).cloned().collect()
}

/// Per-status task counts (board column headers, list stats)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn of(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut c, t| {
            match t.status {
                TaskStatus::Todo => c.todo += 1,
                TaskStatus::InProgress => c.in_progress += 1,
                TaskStatus::Done => c.done += 1,
            }
            c
        })
    }

    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }
}

/// Status update requested by a drop, or `None` for a same-column drop
pub fn status_change(mv: Option<ZoneMove<TaskStatus>>) -> Option<(u32, TaskStatus)> {
    mv.filter(|m| m.from != m.to).map(|m| (m.id, m.to))
}

/// Apply a confirmed status change. Returns false if the task is gone.
pub fn set_status(tasks: &mut [Task], id: u32, status: TaskStatus) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.status = status;
            true
        }
        None => false,
    }
}

pub fn set_priority(tasks: &mut [Task], id: u32, priority: Priority) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.priority = priority;
            true
        }
        None => false,
    }
}

pub fn remove(tasks: &mut Vec<Task>, id: u32) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Status for the list-view checkbox
pub fn checkbox_status(checked: bool) -> TaskStatus {
    if checked {
        TaskStatus::Done
    } else {
        TaskStatus::Todo
    }
}

/// Ctrl/Cmd + 1/2/3 on a focused task row
pub fn shortcut_status(key: &str) -> Option<TaskStatus> {
    match key {
        "1" => Some(TaskStatus::Todo),
        "2" => Some(TaskStatus::InProgress),
        "3" => Some(TaskStatus::Done),
        _ => None,
    }
}

/// Context menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Edit,
    Move(TaskStatus),
    Delete,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Edit,
        MenuAction::Move(TaskStatus::Todo),
        MenuAction::Move(TaskStatus::InProgress),
        MenuAction::Move(TaskStatus::Done),
        MenuAction::Delete,
    ];

    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "edit" => Some(MenuAction::Edit),
            "move-todo" => Some(MenuAction::Move(TaskStatus::Todo)),
            "move-progress" => Some(MenuAction::Move(TaskStatus::InProgress)),
            "move-done" => Some(MenuAction::Move(TaskStatus::Done)),
            "delete" => Some(MenuAction::Delete),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MenuAction::Edit => "edit",
            MenuAction::Move(TaskStatus::Todo) => "move-todo",
            MenuAction::Move(TaskStatus::InProgress) => "move-progress",
            MenuAction::Move(TaskStatus::Done) => "move-done",
            MenuAction::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Edit => "✏️ Edit Task",
            MenuAction::Move(TaskStatus::Todo) => "📝 Move to To Do",
            MenuAction::Move(TaskStatus::InProgress) => "🔄 Move to In Progress",
            MenuAction::Move(TaskStatus::Done) => "✅ Move to Done",
            MenuAction::Delete => "🗑️ Delete Task",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            project_id: Some(1),
            assigned_to: None,
            assigned_name: None,
            creator_name: None,
            project_name: None,
            priority: Priority::Medium,
            due_date: None,
            status,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, TaskStatus::Todo),
            task(2, TaskStatus::InProgress),
            task(3, TaskStatus::Todo),
            task(4, TaskStatus::Done),
        ]
    }

    #[test]
    fn test_columns_and_counts() {
        let tasks = sample();
        let todo: Vec<u32> = column(&tasks, TaskStatus::Todo).iter().map(|t| t.id).collect();
        assert_eq!(todo, vec![1, 3]);
        let counts = StatusCounts::of(&tasks);
        assert_eq!(counts, StatusCounts { todo: 2, in_progress: 1, done: 1 });
        assert_eq!(counts.get(TaskStatus::Done), 1);
    }

    #[test]
    fn test_same_column_drop_is_no_call() {
        let mv = ZoneMove { id: 1, from: TaskStatus::Todo, to: TaskStatus::Todo };
        assert_eq!(status_change(Some(mv)), None);
        assert_eq!(status_change(None), None);
    }

    #[test]
    fn test_cross_column_drop_is_one_call() {
        let mv = ZoneMove { id: 1, from: TaskStatus::Todo, to: TaskStatus::Done };
        assert_eq!(status_change(Some(mv)), Some((1, TaskStatus::Done)));
    }

    #[test]
    fn test_set_status_moves_between_columns() {
        let mut tasks = sample();
        assert!(set_status(&mut tasks, 1, TaskStatus::Done));
        assert_eq!(StatusCounts::of(&tasks), StatusCounts { todo: 1, in_progress: 1, done: 2 });
        assert!(!set_status(&mut tasks, 99, TaskStatus::Done));
    }

    #[test]
    fn test_remove_decrements_column() {
        let mut tasks = sample();
        assert!(remove(&mut tasks, 3));
        assert_eq!(StatusCounts::of(&tasks).todo, 1);
        assert!(!remove(&mut tasks, 3));
    }

    #[test]
    fn test_priority_patch() {
        let mut tasks = sample();
        assert!(set_priority(&mut tasks, 4, Priority::High));
        assert_eq!(tasks[3].priority, Priority::High);
    }

    #[test]
    fn test_menu_action_keys_round_trip() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::parse(action.key()), Some(action));
        }
        assert_eq!(MenuAction::parse("archive"), None);
    }

    #[test]
    fn test_shortcuts_and_checkbox() {
        assert_eq!(shortcut_status("2"), Some(TaskStatus::InProgress));
        assert_eq!(shortcut_status("4"), None);
        assert_eq!(checkbox_status(true), TaskStatus::Done);
        assert_eq!(checkbox_status(false), TaskStatus::Todo);
    }
}
