//! My Tasks Page
//!
//! Flat task list across projects: status picker, done checkbox, header
//! stats and per-row keyboard shortcuts. Shares the board controller's
//! mutations and positioned-menu marker.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::board::{checkbox_status, shortcut_status, MenuAction};
use crate::context::use_app;
use crate::controller::{use_board, TaskBoardController};
use crate::dom::{self, DocumentEvents};
use crate::models::{Task, TaskStatus};
use crate::placement::{Align, Rect};
use crate::store::{self, BoardState};

const STATUS_MENU_ID: &str = "statusMenu";

#[component]
pub fn MyTasks(tasks: Vec<Task>) -> impl IntoView {
    let app = use_app();
    let store = Store::new(BoardState::new(tasks));
    let board = TaskBoardController::new(app, store, None);
    provide_context(board);

    let counts = move || store::store_counts(&store);

    view! {
        <div class="my-tasks">
            <div class="task-stats">
                {TaskStatus::ALL.iter().map(|status| {
                    let status = *status;
                    view! {
                        <div class=format!("stat-card stat-{}", status.as_str())>
                            <span class="stat-number">{move || counts().get(status)}</span>
                            <span class="stat-label">{status.title()}</span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="task-items">
                <Show
                    when=move || !store::store_is_empty(&store)
                    fallback=|| view! {
                        <div class="empty-state">
                            <div class="empty-icon">"✅"</div>
                            <h3>"No Tasks Assigned"</h3>
                            <p>"Tasks assigned to you across your projects will show up here."</p>
                        </div>
                    }
                >
                    <For
                        each=move || store::store_tasks(&store)
                        key=|t| (t.id, t.status)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </Show>
            </div>
        </div>
        <StatusMenu />
    }
}

#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let board = use_board();
    let id = task.id;
    let status = task.status;
    let done = status == TaskStatus::Done;
    let row = NodeRef::<html::Div>::new();

    let open_picker = move |ev: web_sys::MouseEvent| {
        let Some(button) = dom::closest_to_target(&ev, ".status-btn") else {
            return;
        };
        let anchor = Rect::from_dom(&button.get_bounding_client_rect());
        board.open_menu(id, anchor, Align::Left, STATUS_MENU_ID);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() {
            if let Some(next) = shortcut_status(&ev.key()) {
                ev.prevent_default();
                board.update_status(id, next);
            }
            return;
        }
        let on_row = match (dom::event_element(&ev), row.get_untracked()) {
            (Some(target), Some(node)) => target.is_same_node(Some(node.as_ref())),
            _ => false,
        };
        if on_row && (ev.key() == "Enter" || ev.key() == " ") {
            ev.prevent_default();
            board.update_status(id, checkbox_status(!done));
        }
    };

    let focus_row = move |ev: web_sys::MouseEvent| {
        if dom::target_within(&ev, "input, button, .status-btn") {
            return;
        }
        if let Some(node) = row.get_untracked() {
            let _ = node.focus();
        }
    };

    let style = if done { "opacity: 0.7;" } else { "opacity: 1;" };
    let title_style = if done { "text-decoration: line-through;" } else { "text-decoration: none;" };
    let project = task.project_name.clone().unwrap_or_default();

    view! {
        <div
            class=format!("task-item status-{}", status.as_str())
            data-task-id=id.to_string()
            tabindex="0"
            style=style
            node_ref=row
            on:keydown=on_keydown
            on:click=focus_row
        >
            <input
                type="checkbox"
                prop:checked=done
                on:change=move |ev: web_sys::Event| {
                    let checked = event_target_checked(&ev);
                    let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                    board.update_status_or(id, checkbox_status(checked), move || {
                        if let Some(input) = input {
                            input.set_checked(done);
                        }
                    });
                }
            />
            <div class="task-info">
                <span class="task-title" style=title_style>{task.title.clone()}</span>
                <span class="task-project">{project}</span>
                {task.due_date.clone().map(|due| view! { <span class="task-due">"📅 " {due}</span> })}
            </div>
            <span class=format!("priority-badge priority-{}", task.priority.as_str())>{task.priority.label()}</span>
            <button class="status-btn" on:click=open_picker>{status.label()}</button>
        </div>
    }
}

#[component]
fn StatusMenu() -> impl IntoView {
    let board = use_board();

    DocumentEvents::on_click(move |ev| {
        let inside = dom::target_within(&ev, &format!("#{}", STATUS_MENU_ID)) || dom::target_within(&ev, ".status-btn");
        if !inside {
            board.close_menu();
        }
    });
    DocumentEvents::on_keydown(move |ev| {
        if ev.key() == "Escape" {
            board.close_menu();
        }
    });

    let current = move || {
        board
            .menu_target()
            .and_then(|id| store::store_find(&board.store, id))
            .map(|t| t.status)
    };

    let style = move || match board.menu.get() {
        Some(open) => open.position.style(),
        None => "display: none;".to_string(),
    };

    view! {
        <div id=STATUS_MENU_ID class="status-menu" style=style>
            {TaskStatus::ALL.iter().map(|status| {
                let status = *status;
                view! {
                    <div
                        class=move || if current() == Some(status) { "status-option active" } else { "status-option" }
                        data-status=status.as_str()
                        on:click=move |_| board.dispatch(MenuAction::Move(status))
                    >
                        {status.label()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
