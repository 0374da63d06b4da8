//! Task Board Controller
//!
//! Owns the board's singleton UI markers (drag session, open positioned
//! menu, editing marker) and runs every task mutation: one request, then a
//! toast and a store patch on success, or an error toast and no change.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{create_dnd_signals, DndSignals, ZoneMove};

use crate::api::{self, TaskForm};
use crate::board::{self, MenuAction};
use crate::context::{AppContext, ModalId};
use crate::dom;
use crate::error::ApiError;
use crate::models::{Priority, Task, TaskStatus};
use crate::placement::{self, Align, MenuPosition, Rect};
use crate::store::{self, BoardStore, Mutation};
use crate::toast::ToastKind;

/// Open positioned menu (task context menu or status picker)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenMenu {
    pub task_id: u32,
    pub anchor: Rect,
    pub position: MenuPosition,
}

/// Task modal form fields
#[derive(Clone, Copy)]
pub struct TaskDraft {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    /// User id as text; empty means unassigned
    pub assigned_to: RwSignal<String>,
    pub priority: RwSignal<Priority>,
    pub due_date: RwSignal<String>,
}

impl TaskDraft {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            assigned_to: RwSignal::new(String::new()),
            priority: RwSignal::new(Priority::Medium),
            due_date: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.assigned_to.set(String::new());
        self.priority.set(Priority::Medium);
        self.due_date.set(String::new());
    }

    pub fn populate(&self, task: &Task) {
        self.title.set(task.title.clone());
        self.description.set(task.description.clone().unwrap_or_default());
        self.assigned_to
            .set(task.assigned_to.map(|id| id.to_string()).unwrap_or_default());
        self.priority.set(task.priority);
        self.due_date.set(task.due_date.clone().unwrap_or_default());
    }

    /// Request body; `editing` selects update over create
    pub fn to_form(&self, project_id: u32, editing: Option<u32>) -> TaskForm {
        let optional = |s: String| if s.trim().is_empty() { None } else { Some(s) };
        TaskForm {
            task_id: editing,
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            project_id,
            assigned_to: self.assigned_to.get_untracked().trim().parse().ok(),
            priority: self.priority.get_untracked(),
            due_date: optional(self.due_date.get_untracked()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct TaskBoardController {
    pub store: BoardStore,
    pub dnd: DndSignals<TaskStatus>,
    pub menu: RwSignal<Option<OpenMenu>>,
    /// Task being edited in the task modal; `None` means create mode
    pub editing: RwSignal<Option<u32>>,
    pub draft: TaskDraft,
    app: AppContext,
    project_id: Option<u32>,
}

impl TaskBoardController {
    pub fn new(app: AppContext, store: BoardStore, project_id: Option<u32>) -> Self {
        Self {
            store,
            dnd: create_dnd_signals(),
            menu: RwSignal::new(None),
            editing: RwSignal::new(None),
            draft: TaskDraft::new(),
            app,
            project_id,
        }
    }

    // ========================
    // Drag and drop
    // ========================

    pub fn handle_drop(&self, mv: ZoneMove<TaskStatus>) {
        if let Some((id, status)) = board::status_change(Some(mv)) {
            log::debug!("[BOARD] drop task {} -> {}", id, status.as_str());
            self.update_status(id, status);
        }
    }

    // ========================
    // Mutations
    // ========================

    pub fn update_status(&self, id: u32, status: TaskStatus) {
        self.update_status_or(id, status, || {});
    }

    /// `on_error` puts the triggering control back to the stored value
    pub fn update_status_or(&self, id: u32, status: TaskStatus, on_error: impl FnOnce() + 'static) {
        let this = *self;
        spawn_local(async move {
            let outcome = api::update_task_status(id, status).await.map(|r| r.message);
            if !this.settle(Mutation::Status(id, status), outcome, "Error updating task. Please try again.") {
                on_error();
            }
        });
    }

    pub fn update_priority_or(&self, id: u32, priority: Priority, on_error: impl FnOnce() + 'static) {
        let this = *self;
        spawn_local(async move {
            let outcome = api::update_task_priority(id, priority).await.map(|r| r.message);
            if !this.settle(
                Mutation::Priority(id, priority),
                outcome,
                "Error updating task priority. Please try again.",
            ) {
                on_error();
            }
        });
    }

    pub fn delete_task(&self, id: u32) {
        if !dom::confirm("Are you sure you want to delete this task? This action cannot be undone.") {
            return;
        }
        let this = *self;
        let animation_ms = self.app.config.with_value(|c| c.delete_animation_ms);
        spawn_local(async move {
            let outcome = api::delete_task(id).await.map(|r| r.message);
            if this.settle(Mutation::Removing(id), outcome, "Error deleting task. Please try again.") {
                TimeoutFuture::new(animation_ms).await;
                store::store_apply(&this.store, Mutation::Removed(id));
            }
        });
    }

    /// Toast the outcome and patch the store on success
    fn settle(&self, mutation: Mutation, outcome: Result<String, ApiError>, fallback: &str) -> bool {
        let (kind, text) = store::store_settle(&self.store, mutation, outcome, fallback);
        self.app.toaster.notify(&text, kind);
        kind == ToastKind::Success
    }

    // ========================
    // Task modal
    // ========================

    pub fn open_create(&self) {
        self.editing.set(None);
        self.draft.reset();
        self.app.modals.open(ModalId::Task);
    }

    /// Fetch the task, fill the form, open the modal in edit mode
    pub fn begin_edit(&self, id: u32) {
        let this = *self;
        spawn_local(async move {
            match api::get_task(id).await {
                Ok(task) => {
                    this.draft.populate(&task);
                    this.editing.set(Some(task.id));
                    this.app.modals.open(ModalId::Task);
                }
                Err(e) => this.app.report(&e, "Error loading task details. Please try again."),
            }
        });
    }

    /// Runs whenever the task modal closes, whatever closed it
    pub fn reset_modal(&self) {
        self.draft.reset();
        self.editing.set(None);
    }

    pub fn close_modal(&self) {
        self.app.modals.close(ModalId::Task);
    }

    pub fn is_editing(&self) -> bool {
        self.editing.get().is_some()
    }

    pub fn submit(&self) {
        let Some(project_id) = self.project_id else {
            log::error!("[BOARD] task form submitted outside a project page");
            return;
        };
        let editing = self.editing.get_untracked();
        let form = self.draft.to_form(project_id, editing);
        let this = *self;
        spawn_local(async move {
            let result = match editing {
                Some(_) => api::update_task(&form).await.map(|r| r.message),
                None => api::create_task(&form).await.map(|r| r.message),
            };
            match result {
                Ok(message) => {
                    this.app.toaster.success(&message);
                    this.close_modal();
                    dom::reload_page();
                }
                Err(e) => this.app.report(&e, "Error saving task. Please try again."),
            }
        });
    }

    // ========================
    // Positioned menu
    // ========================

    /// Open the menu for `task_id` below `anchor`, then re-check it against
    /// the viewport once element `menu_id` has been laid out.
    pub fn open_menu(&self, task_id: u32, anchor: Rect, align: Align, menu_id: &'static str) {
        let scroll = dom::scroll_offset();
        let position = placement::initial_position(anchor, align, scroll);
        self.menu.set(Some(OpenMenu { task_id, anchor, position }));

        let menu = self.menu;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            let Some(el) = dom::element_by_id(menu_id) else { return };
            let measured = Rect::from_dom(&el.get_bounding_client_rect());
            menu.update(|open| {
                if let Some(open) = open.as_mut().filter(|o| o.task_id == task_id) {
                    open.position = placement::adjust_position(
                        open.position,
                        open.anchor,
                        measured,
                        dom::viewport_size(),
                        dom::scroll_offset(),
                    );
                }
            });
        });
    }

    pub fn close_menu(&self) {
        if self.menu.get_untracked().is_some() {
            self.menu.set(None);
        }
    }

    pub fn menu_target(&self) -> Option<u32> {
        self.menu.get().map(|m| m.task_id)
    }

    /// Context menu entry chosen: run it and close the menu
    pub fn dispatch(&self, action: MenuAction) {
        let Some(task_id) = self.menu.get_untracked().map(|m| m.task_id) else {
            return;
        };
        self.close_menu();
        match action {
            MenuAction::Edit => self.begin_edit(task_id),
            MenuAction::Move(status) => self.update_status(task_id, status),
            MenuAction::Delete => self.delete_task(task_id),
        }
    }
}

pub fn use_board() -> TaskBoardController {
    expect_context::<TaskBoardController>()
}
