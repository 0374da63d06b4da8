//! Theme Toggle

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app;
use crate::dom;

fn theme_icon(theme: &str) -> &'static str {
    if theme == "dark" {
        "🌙"
    } else {
        "☀️"
    }
}

#[component]
pub fn ThemeToggle(#[prop(into)] theme: String) -> impl IntoView {
    let app = use_app();
    let (theme, set_theme) = signal(theme);

    let on_click = move |_| {
        spawn_local(async move {
            match api::toggle_theme().await {
                Ok(reply) => {
                    dom::apply_theme(&reply.theme);
                    set_theme.set(reply.theme);
                }
                Err(e) => app.report(&e, "Error switching theme"),
            }
        });
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" on:click=on_click>
            {move || theme_icon(&theme.get())}
        </button>
    }
}
