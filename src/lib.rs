//! # glassfront
//!
//! Leptos CSR shell for the Glassfront landing page. Renders the page
//! skeleton (navigation, hero, action buttons, decoration containers) and,
//! once mounted in a browser, hands the live document to the `fx`
//! interaction engine.
//!
//! Build for the browser with the `csr` feature; without it the crate only
//! exposes the components, which keeps `cargo test` native.

pub mod app;
pub mod components;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
