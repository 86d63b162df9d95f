//! # portfolio-ui
//!
//! Leptos + WASM behavior layer for a single-page personal portfolio:
//! theme color, font and dark mode preferences persisted in `localStorage`,
//! a settings sidebar, scroll-spy navigation, a portfolio category filter
//! and a testimonials carousel.
//!
//! Page logic lives in `state` and tests on the host; `util` holds the
//! browser glue, compiled in with the `csr` feature and inert without it.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("portfolio-ui starting");
    leptos::mount::mount_to_body(app::App);
}
