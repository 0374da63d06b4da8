//! Project Grid Component
//!
//! Dashboard project cards with search-as-you-type, per-card menus and
//! animated deletion.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CreateProjectModal, MenuFamily};
use crate::context::{use_app, ModalId};
use crate::dom;
use crate::models::Project;
use crate::search;

/// Card shrink-and-fade before it leaves the grid
const PROJECT_REMOVE_MS: u32 = 450;

fn delete_prompt(name: &str) -> String {
    format!(
        "Are you sure you want to delete \"{}\"?\n\nThis will permanently delete:\n• All project tasks\n• All project messages\n• All project members\n\nThis action cannot be undone!",
        name
    )
}

#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> impl IntoView {
    let app = use_app();
    let projects = RwSignal::new(projects);
    let removing = RwSignal::new(Vec::<u32>::new());
    let (term, set_term) = signal(String::new());
    let menus = MenuFamily::<u32>::new(".card-menu");

    let outcome = Memo::new(move |_| projects.with(|all| search::filter_projects(all, &term.get())));

    let delete_project = move |project: Project| {
        menus.close();
        if !dom::confirm(&delete_prompt(&project.name)) {
            return;
        }
        let id = project.id;
        spawn_local(async move {
            match api::delete_project(id).await {
                Ok(reply) => {
                    app.toaster.success(&reply.message);
                    removing.update(|r| r.push(id));
                    TimeoutFuture::new(PROJECT_REMOVE_MS).await;
                    projects.update(|all| all.retain(|p| p.id != id));
                    removing.update(|r| r.retain(|x| *x != id));
                }
                Err(e) => app.report(&e, "An error occurred while deleting the project"),
            }
        });
    };

    let on_search = move |ev: web_sys::Event| set_term.set(event_target_value(&ev));

    view! {
        <div class="dashboard-toolbar">
            <input
                type="text"
                class="search-input"
                placeholder="Search projects..."
                prop:value=move || term.get()
                on:input=on_search
                on:keyup=move |ev: web_sys::KeyboardEvent| set_term.set(event_target_value(&ev))
            />
            <button class="btn-primary" on:click=move |_| app.modals.open(ModalId::CreateProject)>
                "+ New Project"
            </button>
        </div>

        <div class="projects-grid">
            <Show
                when=move || projects.with(|p| !p.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <div class="empty-icon">"📋"</div>
                        <h3>"No Projects Yet"</h3>
                        <p>"Create your first project to start collaborating with your team."</p>
                        <button class="btn-primary" on:click=move |_| app.modals.open(ModalId::CreateProject)>
                            "Create Project"
                        </button>
                    </div>
                }
            >
                <For
                    each=move || projects.get()
                    key=|p| p.id
                    children=move |project| {
                        let id = project.id;
                        let visible = move || outcome.with(|o| o.visible.contains(&id));
                        let is_removing = move || removing.with(|r| r.contains(&id));
                        view! {
                            <ProjectCard
                                project=project
                                menus=menus
                                hidden=Signal::derive(move || !visible())
                                removing=Signal::derive(is_removing)
                                on_delete=Callback::new(delete_project)
                            />
                        }
                    }
                />
                <Show when=move || outcome.with(|o| o.show_no_results)>
                    <div class="search-empty-state">
                        <div class="empty-icon">"🔍"</div>
                        <h3>"No Projects Found"</h3>
                        <p>"Try adjusting your search terms or create a new project."</p>
                        <button class="btn-secondary" on:click=move |_| set_term.set(String::new())>
                            "Clear Search"
                        </button>
                    </div>
                </Show>
            </Show>
        </div>

        <CreateProjectModal />
    }
}

#[component]
fn ProjectCard(
    project: Project,
    menus: MenuFamily<u32>,
    hidden: Signal<bool>,
    removing: Signal<bool>,
    on_delete: Callback<Project>,
) -> impl IntoView {
    let id = project.id;
    let href = format!("/project/{}", id);
    let description = project.description.clone().unwrap_or_default();
    let tags = project.display_tags();
    let for_delete = project.clone();

    let open_project = move |ev: web_sys::MouseEvent| {
        if dom::target_within(&ev, ".card-menu") {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(&format!("/project/{}", id));
        }
    };

    view! {
        <div
            class=move || if removing.get() { "project-card removing" } else { "project-card" }
            data-color=project.color.clone()
            data-project-id=id.to_string()
            style=move || if hidden.get() { "display: none;" } else { "" }
            on:click=open_project
        >
            <div class="card-header">
                <h3 class="card-title">{project.name.clone()}</h3>
                <div class="card-menu">
                    <button
                        class="card-menu-btn"
                        on:click=move |_| menus.toggle(id)
                    >
                        "⋮"
                    </button>
                    <div id=format!("project-menu-{}", id) class=move || menus.class("project-dropdown", id)>
                        <a class="dropdown-item" href=href>"📂 Open"</a>
                        <button
                            class="dropdown-item danger"
                            on:click=move |_| on_delete.run(for_delete.clone())
                        >
                            "🗑️ Delete Project"
                        </button>
                    </div>
                </div>
            </div>
            <p class="project-description">{description}</p>
            <div class="project-tags">
                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
            <div class="card-footer">
                <span class="card-stat">"📋 " {project.task_count} " tasks"</span>
                <span class="card-stat">"👥 " {project.member_count} " members"</span>
                {project.creator_name.clone().map(|name| view! { <span class="card-creator">"by " {name}</span> })}
            </div>
        </div>
    }
}
