//! Groupypay Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod paypal;
mod session;
mod splits;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_env();
    rolling_logger::init_or_warn("Groupypay", config.log_level);
    log::info!("Starting Groupypay UI against {}", config.base_url);

    mount_to_body(App);
}
