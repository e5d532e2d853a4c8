//! # client
//!
//! Leptos + WASM frontend for the smart navigation system: a location panel,
//! a route planner over an interactive tile map, and a live traffic
//! dashboard.
//!
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Browser-only code sits behind the `hydrate` feature so the
//! state and parsing logic stays testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }
    leptos::mount::hydrate_body(app::App);
}
