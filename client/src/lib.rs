//! # client
//!
//! Leptos + WASM front-end for PomodoroFlow: landing page, login and
//! registration forms, theme toggle, and the static route table.
//!
//! Form rules live in `forms` and are plain Rust so they can be tested
//! without a browser. Submission goes through the `AuthBackend` seam in
//! `net::auth`.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
