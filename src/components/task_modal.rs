//! Task Modal Component
//!
//! One dialog for both creating and editing a task. The controller's
//! editing marker selects the mode; closing the dialog by any path resets
//! the form back to create mode.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::{use_app, ModalId};
use crate::controller::use_board;
use crate::models::{Member, Priority};

#[component]
pub fn TaskModal(members: Vec<Member>) -> impl IntoView {
    let app = use_app();
    let board = use_board();
    let draft = board.draft;
    let members = StoredValue::new(members);

    Effect::new(move |_| {
        if !app.modals.is_open(ModalId::Task) {
            board.reset_modal();
        }
    });

    let title = Signal::derive(move || {
        if board.is_editing() { "Edit Task" } else { "Create New Task" }.to_string()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        board.submit();
    };

    view! {
        <Modal id=ModalId::Task dom_id="createTaskModal" title=title escape=true>
            <form id="createTaskForm" class="modal-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="task-title">"Title"</label>
                    <input
                        type="text"
                        id="task-title"
                        name="title"
                        required
                        prop:value=move || draft.title.get()
                        on:input=move |ev| draft.title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="task-description">"Description"</label>
                    <textarea
                        id="task-description"
                        name="description"
                        rows="3"
                        prop:value=move || draft.description.get()
                        on:input=move |ev| draft.description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="task-assignee">"Assign To"</label>
                        <select
                            id="task-assignee"
                            name="assigned_to"
                            prop:value=move || draft.assigned_to.get()
                            on:change=move |ev| draft.assigned_to.set(event_target_value(&ev))
                        >
                            <option value="">"Unassigned"</option>
                            {members.with_value(|members| members.iter().map(|m| view! {
                                <option value=m.user_id.to_string()>{m.name()}</option>
                            }).collect_view())}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="task-priority">"Priority"</label>
                        <select
                            id="task-priority"
                            name="priority"
                            prop:value=move || draft.priority.get().as_str()
                            on:change=move |ev| {
                                if let Some(p) = Priority::parse(&event_target_value(&ev)) {
                                    draft.priority.set(p);
                                }
                            }
                        >
                            {Priority::ALL.iter().map(|p| view! {
                                <option value=p.as_str()>{p.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="task-due">"Due Date"</label>
                        <input
                            type="date"
                            id="task-due"
                            name="due_date"
                            prop:value=move || draft.due_date.get()
                            on:input=move |ev| draft.due_date.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn-cancel" on:click=move |_| board.close_modal()>"Cancel"</button>
                    <button type="submit" class="btn-save">
                        {move || if board.is_editing() { "Update Task" } else { "Create Task" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
