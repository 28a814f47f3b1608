//! # campsite-client
//!
//! Leptos + WASM frontend for the campsite detail page: campsite card,
//! comment list, and the validated comment form.
//!
//! The crate renders on the server through `campsite-server` (feature `ssr`)
//! and hydrates in the browser (feature `hydrate`). Pure state and validation
//! logic lives in `state` and `util` so it is testable without either.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
