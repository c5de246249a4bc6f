#[cfg(target_arch = "wasm32")]
use doorway::{
    app::App,
    app_lib::{config::AppConfig, logging},
};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    logging::init(&AppConfig::load().log_filter);
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
