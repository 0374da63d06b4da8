//! Task Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board and
//! the flat list both render from this store; every confirmed mutation is
//! applied here.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board;
use crate::error::ApiError;
use crate::models::{Priority, Task, TaskStatus};
use crate::toast::ToastKind;

/// Task state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Tasks rendered on this page
    pub tasks: Vec<Task>,
    /// Tasks playing their removal animation
    pub removing: Vec<u32>,
}

/// Board change the server has to confirm before it is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation {
    Status(u32, TaskStatus),
    Priority(u32, Priority),
    /// Card starts its removal animation
    Removing(u32),
    /// Animation finished; card leaves the board
    Removed(u32),
}

impl BoardState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks, removing: Vec::new() }
    }

    /// Returns false when the task is no longer on this page
    pub fn apply(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::Status(id, status) => board::set_status(&mut self.tasks, id, status),
            Mutation::Priority(id, priority) => board::set_priority(&mut self.tasks, id, priority),
            Mutation::Removing(id) => {
                if !self.tasks.iter().any(|t| t.id == id) {
                    return false;
                }
                if !self.removing.contains(&id) {
                    self.removing.push(id);
                }
                true
            }
            Mutation::Removed(id) => {
                self.removing.retain(|r| *r != id);
                board::remove(&mut self.tasks, id)
            }
        }
    }

    /// Apply `mutation` only if its request succeeded. Returns the toast to
    /// show: the server's message, or the error text with state untouched.
    pub fn settle(
        &mut self,
        mutation: Mutation,
        outcome: Result<String, ApiError>,
        fallback: &str,
    ) -> (ToastKind, String) {
        match outcome {
            Ok(message) => {
                if !self.apply(mutation) {
                    log::warn!("[BOARD] {:?} landed after the task left the page", mutation);
                }
                (ToastKind::Success, message)
            }
            Err(e) => (ToastKind::Error, e.toast_text(fallback)),
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_tasks(store: &BoardStore) -> Vec<Task> {
    store.tasks().get()
}

pub fn store_is_empty(store: &BoardStore) -> bool {
    store.tasks().with(|tasks| tasks.is_empty())
}

pub fn store_column(store: &BoardStore, status: TaskStatus) -> Vec<Task> {
    store.tasks().with(|tasks| board::column(tasks, status))
}

pub fn store_counts(store: &BoardStore) -> board::StatusCounts {
    store.tasks().with(|tasks| board::StatusCounts::of(tasks))
}

pub fn store_find(store: &BoardStore, id: u32) -> Option<Task> {
    store.tasks().with_untracked(|tasks| tasks.iter().find(|t| t.id == id).cloned())
}

pub fn store_is_removing(store: &BoardStore, id: u32) -> bool {
    store.removing().with(|ids| ids.contains(&id))
}

fn store_snapshot(store: &BoardStore) -> BoardState {
    BoardState {
        tasks: store.tasks().get_untracked(),
        removing: store.removing().get_untracked(),
    }
}

fn store_commit(store: &BoardStore, state: BoardState) {
    *store.tasks().write() = state.tasks;
    *store.removing().write() = state.removing;
}

/// Settle a mutation request against the store; see `BoardState::settle`
pub fn store_settle(
    store: &BoardStore,
    mutation: Mutation,
    outcome: Result<String, ApiError>,
    fallback: &str,
) -> (ToastKind, String) {
    let mut state = store_snapshot(store);
    let settled = state.settle(mutation, outcome, fallback);
    if settled.0 == ToastKind::Success {
        store_commit(store, state);
    }
    settled
}

/// Apply a follow-up step that needs no request
pub fn store_apply(store: &BoardStore, mutation: Mutation) {
    let mut state = store_snapshot(store);
    if state.apply(mutation) {
        store_commit(store, state);
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

    fn state() -> BoardState {
        BoardState::new(vec![task(1, TaskStatus::Todo), task(2, TaskStatus::Done)])
    }

    #[test]
    fn test_failed_status_update_leaves_state() {
        let mut s = state();
        let before = s.tasks.clone();
        let (kind, text) = s.settle(
            Mutation::Status(1, TaskStatus::Done),
            Err(ApiError::Transport("TypeError: Failed to fetch".into())),
            "Error updating task. Please try again.",
        );
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(text, "Error updating task. Please try again.");
        assert_eq!(s.tasks, before);
        assert!(s.removing.is_empty());
    }

    #[test]
    fn test_rejected_update_shows_server_message() {
        let mut s = state();
        let (kind, text) = s.settle(
            Mutation::Priority(2, Priority::High),
            Err(ApiError::Rejected("Access denied".into())),
            "Error updating task priority. Please try again.",
        );
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(text, "Access denied");
        assert_eq!(s.tasks[1].priority, Priority::Medium);
    }

    #[test]
    fn test_successful_status_update_patches_state() {
        let mut s = state();
        let (kind, text) = s.settle(
            Mutation::Status(1, TaskStatus::InProgress),
            Ok("Task status updated".into()),
            "Error updating task. Please try again.",
        );
        assert_eq!(kind, ToastKind::Success);
        assert_eq!(text, "Task status updated");
        assert_eq!(s.tasks[0].status, TaskStatus::InProgress);
    }

    #[test]
    fn test_delete_marks_then_removes() {
        let mut s = state();
        let (kind, _) = s.settle(Mutation::Removing(1), Ok("Task deleted".into()), "Error deleting task.");
        assert_eq!(kind, ToastKind::Success);
        assert_eq!(s.removing, vec![1]);
        assert_eq!(s.tasks.len(), 2);

        assert!(s.apply(Mutation::Removed(1)));
        assert!(s.removing.is_empty());
        assert_eq!(s.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(board::StatusCounts::of(&s.tasks).todo, 0);
    }

    #[test]
    fn test_failed_delete_keeps_card() {
        let mut s = state();
        let (kind, _) = s.settle(
            Mutation::Removing(2),
            Err(ApiError::Decode("expected value".into())),
            "Error deleting task. Please try again.",
        );
        assert_eq!(kind, ToastKind::Error);
        assert!(s.removing.is_empty());
        assert_eq!(s.tasks.len(), 2);
    }

    #[test]
    fn test_update_for_missing_task_is_ignored() {
        let mut s = state();
        assert!(!s.apply(Mutation::Status(9, TaskStatus::Done)));
        assert!(!s.apply(Mutation::Removing(9)));
        assert!(s.removing.is_empty());
    }
}
