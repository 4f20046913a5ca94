//! # client
//!
//! Leptos + WASM storefront. Renders the catalog, the sign-in form and the
//! admin inventory tools, and dispatches user actions through the shared
//! `storefront` crate.
//!
//! Build with `hydrate` for the browser bundle and `ssr` for the host server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
