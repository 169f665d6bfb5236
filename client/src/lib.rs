//! # client
//!
//! Leptos + WASM frontend for the food decoder: upload a food photo to get
//! its predicted name, and ask free-text questions about food.
//!
//! The page owns two state records from the `decoder` crate and runs their
//! effects through `net::api`. Everything that touches the browser is
//! behind the `hydrate` feature; the `ssr` build renders the same view with
//! empty state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
