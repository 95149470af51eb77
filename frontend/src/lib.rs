#![recursion_limit = "256"]
use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn main() {
    // better panic messages in the browser console
    console_error_panic_hook::set_once();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("mounting {}", env!("CARGO_PKG_NAME"));
    leptos::mount::mount_to_body(App);
}
