pub mod app;
pub mod app_shell;
pub mod config;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::app_config;

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(app_config().logging.level());
    console_error_panic_hook::set_once();

    log::info!("SellControl starting, backend at {}", app_config().backend.url);
    leptos::mount::mount_to_body(app::App);
}
