//! Create Project Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateProjectArgs};
use crate::components::Modal;
use crate::context::{use_app, ModalId};

/// Card colors offered by the form
const PROJECT_COLORS: &[(&str, &str)] = &[
    ("blue", "Blue"),
    ("green", "Green"),
    ("purple", "Purple"),
    ("orange", "Orange"),
    ("red", "Red"),
];

#[component]
pub fn CreateProjectModal() -> impl IntoView {
    let app = use_app();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let color = RwSignal::new(PROJECT_COLORS[0].0.to_string());

    Effect::new(move |_| {
        if !app.modals.is_open(ModalId::CreateProject) {
            name.set(String::new());
            description.set(String::new());
            color.set(PROJECT_COLORS[0].0.to_string());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = CreateProjectArgs {
            name: name.get_untracked(),
            description: description.get_untracked(),
            color: color.get_untracked(),
        };
        spawn_local(async move {
            match api::create_project(&args).await {
                Ok(reply) => {
                    log::info!("[PROJECT] created {:?}", reply.data.project_id);
                    app.toaster.success(&reply.message);
                    app.modals.close(ModalId::CreateProject);
                    app.reload_soon();
                }
                Err(e) => app.report(&e, "Error creating project. Please try again."),
            }
        });
    };

    view! {
        <Modal
            id=ModalId::CreateProject
            dom_id="createProjectModal"
            title=Signal::stored("Create New Project".to_string())
        >
            <form id="createProjectForm" class="modal-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="project-name">"Project Name"</label>
                    <input
                        type="text"
                        id="project-name"
                        name="name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="project-description">"Description"</label>
                    <textarea
                        id="project-description"
                        name="description"
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="project-color">"Color"</label>
                    <select
                        id="project-color"
                        name="color"
                        prop:value=move || color.get()
                        on:change=move |ev| color.set(event_target_value(&ev))
                    >
                        {PROJECT_COLORS.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn-cancel" on:click=move |_| app.modals.close(ModalId::CreateProject)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-save">"Create Project"</button>
                </div>
            </form>
        </Modal>
    }
}
