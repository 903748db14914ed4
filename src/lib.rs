//! # tourtribe
//!
//! Leptos front-end for a traveler social network: a browsable feed of posts,
//! trips and people, a mock sign-in backed by a fixed demo directory, and a
//! share-trip flow gated on being signed in.
//!
//! The session is persisted in browser `localStorage` and restored on load.
//! There is no backend; all content is seeded in memory.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod pages;
pub mod state;
pub mod types;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
