pub mod app;
pub mod components;
pub mod dark_mode;
pub mod pages;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("mounting navigation header app");
    leptos::mount_to_body(app::App);
}
