//! # cowork-client
//!
//! Leptos + WASM frontend for the coworking space and cafe: menu ordering,
//! desk booking, the blog, the freelancer directory, and the staff back office.
//!
//! This crate contains pages, components, the session context, and the typed
//! API layer. It renders on the server (`ssr`) inside `cowork-server` and
//! hydrates in the browser (`hydrate`), where all API traffic goes through
//! [`net::api::ApiClient`] with cookie credentials and CSRF handling.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
