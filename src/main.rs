//! CCD Admin Frontend Entry Point

mod alert;
mod api;
mod app;
mod collapsible;
mod components;
mod config;
mod context;
mod dialog;
mod export;
mod options;
mod route;
mod sanitize;
mod sections;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = AppConfig::load();
    if let Err(e) = console_logger::init(&config.log_level) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    for warning in warnings {
        log::warn!("[APP] Ignoring config source: {}", warning);
    }
    log::info!("[APP] Starting with API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
