use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod time_utils;
pub mod view_state;

/// Entry point: install logging, then mount the tracker page.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));

    crate::log_info!(LogComponent::Presentation("Initialize"), "mounting stock price tracker");

    mount_to_body(|| view! { <App /> });
}
