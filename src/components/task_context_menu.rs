//! Task Context Menu Component
//!
//! Singleton positioned menu for the task picked in `TaskBoardController`.
//! Entries carry a `data-action` key dispatched back to the controller.

use leptos::prelude::*;

use crate::board::MenuAction;
use crate::components::task_board::CONTEXT_MENU_ID;
use crate::controller::use_board;
use crate::dom::{self, DocumentEvents};

#[component]
pub fn TaskContextMenu() -> impl IntoView {
    let board = use_board();

    DocumentEvents::on_click(move |ev| {
        let inside = dom::target_within(&ev, &format!("#{}", CONTEXT_MENU_ID)) || dom::target_within(&ev, ".task-menu");
        if !inside {
            board.close_menu();
        }
    });
    DocumentEvents::on_keydown(move |ev| {
        if ev.key() == "Escape" {
            board.close_menu();
        }
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        let action = dom::closest_to_target(&ev, ".task-menu-item")
            .and_then(|item| item.get_attribute("data-action"))
            .and_then(|key| MenuAction::parse(&key));
        match action {
            Some(action) => board.dispatch(action),
            None => log::debug!("[BOARD] context menu click without an action"),
        }
    };

    let style = move || match board.menu.get() {
        Some(open) => open.position.style(),
        None => "display: none;".to_string(),
    };

    view! {
        <div id=CONTEXT_MENU_ID class="task-context-menu" style=style on:click=on_click>
            {MenuAction::ALL.iter().map(|action| {
                let class = if *action == MenuAction::Delete { "task-menu-item danger" } else { "task-menu-item" };
                view! {
                    <div class=class data-action=action.key()>{action.label()}</div>
                }
            }).collect_view()}
        </div>
    }
}
