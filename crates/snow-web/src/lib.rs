//! Browser-facing half of the ServiceNow script generator: the combo builder,
//! the script viewer with copy buttons, and (with `ssr`) the server that
//! renders them and relays requests to the script backend.

pub mod api;
pub mod app;
pub mod browser;
pub mod combos;
pub mod components;
pub mod config;
pub mod pages;
pub mod relay;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
