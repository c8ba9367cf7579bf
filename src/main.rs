//! Tier List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod dnd;
mod logging;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = config::load_config();
    logging::init_logger(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "page config rejected, using defaults");
    }
    tracing::info!(?config, "starting tier list editor");

    mount_to_body(move || view! { <App config=config /> });
}
