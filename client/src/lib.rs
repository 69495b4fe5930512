//! # client
//!
//! Leptos + WASM frontend for the portal single-page application.
//!
//! This crate owns the route table that binds URL paths to views, the module
//! loader that resolves views eagerly or on first navigation, the navigation
//! state machine, and the views themselves. The `csr` feature builds the
//! browser bundle; without it the crate compiles natively for tests and for
//! the host server, which reads the registered paths.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;

/// Browser entry point: install logging and panic reporting, then mount
/// [`app::App`] to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
