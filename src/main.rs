//! Board Shell Frontend Entry Point

mod announcements;
mod app;
mod board;
mod components;
mod config;
mod models;
mod shortcut;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_document() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (AppConfig::default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    if let Err(e) = console_logger::init(level, console_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    if let Some(e) = config_error {
        log::warn!("invalid app config, using defaults: {e}");
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
