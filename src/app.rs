//! Synergy Frontend App
//!
//! Shell component: provides the shared context, replays server flashes and
//! renders the page body chosen by the bootstrap data.

use leptos::prelude::*;

use crate::bootstrap::{Page, PageData};
use crate::components::{Layout, MyTasks, NavItem, ProjectDetail, ProjectGrid};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::dom;
use crate::toast::ToastHost;

#[component]
pub fn App(config: UiConfig, data: PageData) -> impl IntoView {
    let PageData { shell, page } = data;

    let app = AppContext::new(config, shell.user);
    provide_context(app);
    provide_context(app.toaster);

    dom::apply_theme(&shell.theme);
    for flash in &shell.flashes {
        log::debug!("[APP] flash: {}", flash.message);
        app.toaster.notify(&flash.message, flash.kind);
    }

    let theme = shell.theme;
    let body = match page {
        Page::Dashboard { projects } => view! {
            <Layout title="Dashboard" active=NavItem::Dashboard theme=theme>
                <ProjectGrid projects=projects />
            </Layout>
        }
        .into_any(),
        Page::ProjectDetail { project, tasks, members, messages } => {
            let title = project.name.clone();
            view! {
                <Layout title=title active=NavItem::Dashboard theme=theme>
                    <ProjectDetail project=project tasks=tasks members=members messages=messages />
                </Layout>
            }
            .into_any()
        }
        Page::MyTasks { tasks } => view! {
            <Layout title="My Tasks" active=NavItem::MyTasks theme=theme>
                <MyTasks tasks=tasks />
            </Layout>
        }
        .into_any(),
    };

    view! {
        {body}
        <ToastHost />
    }
}

/// Fallback when the page carries no usable bootstrap data
#[component]
pub fn BootstrapFailed(#[prop(into)] reason: String) -> impl IntoView {
    view! {
        <div class="bootstrap-error">
            <h2>"Something went wrong"</h2>
            <p>{reason}</p>
            <button class="btn-primary" on:click=move |_| dom::reload_page()>"Reload"</button>
        </div>
    }
}
