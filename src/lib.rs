//! # course-select
//!
//! Leptos + WASM client for the student course-selection system.
//!
//! The crate holds the session store that keeps the signed-in user's tokens
//! and profile in sync with browser storage, the navigation guard that decides
//! which pages a session may open, and the pages built on top of both.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
