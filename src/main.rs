//! Whisky Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod pages;
mod session;
mod store;

use app::App;
use leptos::prelude::*;
use whisky_core::ApiConfig;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }

    api::init(ApiConfig::from_env());
    mount_to_body(App);
}
