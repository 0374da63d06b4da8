//! Task Board Component
//!
//! Three status columns. Cards drag between columns; each column header
//! shows a count derived from the store.

use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_dragend, make_on_dragenter, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop,
};
use wasm_bindgen::JsCast;

use crate::controller::use_board;
use crate::dom;
use crate::models::{Priority, Task, TaskStatus};
use crate::placement::{Align, Rect};
use crate::store;

pub const CONTEXT_MENU_ID: &str = "taskContextMenu";

#[component]
pub fn TaskBoard() -> impl IntoView {
    let board = use_board();

    view! {
        <div class="task-board">
            <div class="board-toolbar">
                <button class="btn-primary" on:click=move |_| board.open_create()>"+ Add Task"</button>
            </div>
            <div class="board-columns">
                {TaskStatus::ALL.iter().map(|status| view! { <TaskColumn status=*status /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TaskColumn(status: TaskStatus) -> impl IntoView {
    let board = use_board();
    let dnd = board.dnd;

    let on_drop = make_on_drop(dnd, status, move |mv| board.handle_drop(mv));
    let count = move || store::store_counts(&board.store).get(status);
    let tasks = move || store::store_column(&board.store, status);

    view! {
        <div class="task-column">
            <div class="column-header">
                <h4>{status.title()}</h4>
                <span class="task-count">{count}</span>
            </div>
            <div
                class=move || if dnd.is_over(status) { "task-list drag-over" } else { "task-list" }
                data-status=status.as_str()
                on:dragover=make_on_dragover()
                on:dragenter=make_on_dragenter(dnd, status)
                on:dragleave=make_on_dragleave(dnd, status)
                on:drop=on_drop
            >
                <For
                    each=tasks
                    key=|t| (t.id, t.status, t.priority)
                    children=move |task| view! { <TaskCard task=task /> }
                />
                <Show when=move || count() == 0>
                    <div class="empty-column">"No tasks"</div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn TaskCard(task: Task) -> impl IntoView {
    let board = use_board();
    let dnd = board.dnd;
    let id = task.id;
    let status = task.status;
    let priority = task.priority;

    let class = move || {
        let mut c = format!("task-card priority-{}", priority.as_str());
        if dnd.is_dragging(id) {
            c.push_str(" dragging");
        }
        if store::store_is_removing(&board.store, id) {
            c.push_str(" removing");
        }
        c
    };

    let open_menu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let Some(button) = dom::closest_to_target(&ev, ".task-menu") else {
            return;
        };
        let anchor = Rect::from_dom(&button.get_bounding_client_rect());
        board.open_menu(id, anchor, Align::Right, CONTEXT_MENU_ID);
    };

    let on_priority = move |ev: web_sys::Event| {
        let Some(next) = Priority::parse(&event_target_value(&ev)) else {
            return;
        };
        let select = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok());
        board.update_priority_or(id, next, move || {
            if let Some(select) = select {
                select.set_value(priority.as_str());
            }
        });
    };

    let description = task.description.clone().filter(|d| !d.is_empty());

    view! {
        <div
            class=class
            draggable="true"
            data-task-id=id.to_string()
            data-task-status=status.as_str()
            on:dragstart=make_on_dragstart(dnd, id, status)
            on:dragend=make_on_dragend(dnd)
        >
            <div class="task-card-header">
                <span class="task-title">{task.title.clone()}</span>
                <button class="task-menu" on:click=open_menu>"⋮"</button>
            </div>
            {description.map(|d| view! { <p class="task-description">{d}</p> })}
            <div class="task-meta">
                <select class="priority-select" on:change=on_priority>
                    {Priority::ALL.iter().map(|p| view! {
                        <option value=p.as_str() selected={*p == priority}>{p.label()}</option>
                    }).collect_view()}
                </select>
                {task.assigned_name.clone().map(|name| view! { <span class="task-assignee">"👤 " {name}</span> })}
                {task.due_date.clone().map(|due| view! { <span class="task-due">"📅 " {due}</span> })}
            </div>
        </div>
    }
}
