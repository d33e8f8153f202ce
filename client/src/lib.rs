//! # topicview client
//!
//! Leptos + WASM dashboard for browsing precomputed topic-modeling results.
//!
//! This crate contains the root application, the dashboard page, the list and
//! image panel components, local UI state, and the REST helper that loads the
//! `{ topics, documents }` payload. It is rendered on the server with the
//! `ssr` feature and hydrated in the browser with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
