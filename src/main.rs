//! Synergy Frontend Entry Point

mod api;
mod app;
mod board;
mod bootstrap;
mod components;
mod config;
mod context;
mod controller;
mod dom;
mod error;
mod format;
mod logger;
mod models;
mod placement;
mod search;
mod sidebar;
mod store;
mod toast;

use app::{App, BootstrapFailed};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);

    let config = config::UiConfig::from_document();
    api::set_base(&config);

    match bootstrap::load_page() {
        Ok(data) => {
            log::info!("[APP] mounting {} page", data.page.name());
            mount_to_body(move || view! { <App config=config data=data /> });
        }
        Err(e) => {
            log::error!("[APP] bootstrap failed: {}", e);
            let reason = e.to_string();
            mount_to_body(move || view! { <BootstrapFailed reason=reason /> });
        }
    }
}
