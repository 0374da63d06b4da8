//! Project Detail Page
//!
//! Tabs for the task board, project chat and member list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddMemberModal, MessagePanel, TaskBoard, TaskContextMenu, TaskModal};
use crate::context::{use_app, ModalId};
use crate::controller::TaskBoardController;
use crate::models::{Member, Message, Project, Task};
use crate::store::BoardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Tasks,
    Messages,
    Members,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Tasks, Tab::Messages, Tab::Members];

    fn key(&self) -> &'static str {
        match self {
            Tab::Tasks => "tasks",
            Tab::Messages => "messages",
            Tab::Members => "members",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Tab::Tasks => "📋 Tasks",
            Tab::Messages => "💬 Messages",
            Tab::Members => "👥 Members",
        }
    }
}

#[component]
pub fn ProjectDetail(project: Project, tasks: Vec<Task>, members: Vec<Member>, messages: Vec<Message>) -> impl IntoView {
    let app = use_app();
    let store = Store::new(BoardState::new(tasks));
    let board = TaskBoardController::new(app, store, Some(project.id));
    provide_context(board);

    let (tab, set_tab) = signal(Tab::Tasks);
    let tab_class = move |t: Tab, base: &'static str| {
        if tab.get() == t {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    };

    let member_rows = members.clone();

    view! {
        <div class="project-detail">
            <div class="project-header">
                <h2>{project.name.clone()}</h2>
                <p class="project-description">{project.description.clone().unwrap_or_default()}</p>
            </div>

            <div class="tab-headers">
                {Tab::ALL.iter().map(|t| {
                    let t = *t;
                    view! {
                        <button
                            class=move || tab_class(t, "tab-header")
                            data-tab=t.key()
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div id="tasks-tab" class=move || tab_class(Tab::Tasks, "tab-content")>
                <TaskBoard />
            </div>

            <div id="messages-tab" class=move || tab_class(Tab::Messages, "tab-content")>
                <MessagePanel
                    project_id=project.id
                    messages=messages
                    on_sent=Callback::new(move |_| set_tab.set(Tab::Messages))
                />
            </div>

            <div id="members-tab" class=move || tab_class(Tab::Members, "tab-content")>
                <div class="members-toolbar">
                    <button class="btn-primary" on:click=move |_| app.modals.open(ModalId::AddMember)>
                        "+ Add Member"
                    </button>
                </div>
                <div class="members-list">
                    {member_rows.into_iter().map(|m| view! {
                        <div class="member-item">
                            <div class="avatar-circle">{m.name().chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}</div>
                            <div class="member-info">
                                <span class="member-name">{m.name()}</span>
                                <span class="member-email">{m.email.clone()}</span>
                            </div>
                            <span class=format!("member-role role-{}", m.role)>{m.role.clone()}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>

        <TaskModal members=members />
        <AddMemberModal project_id=project.id />
        <TaskContextMenu />
    }
}
