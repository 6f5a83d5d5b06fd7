//! # henart-client
//!
//! Leptos + WASM frontend for the Henart Design storefront and its admin
//! back-office.
//!
//! The crate is split the same way the app is wired: `net` owns the REST
//! boundary (credential injection and 401 handling), `state` owns the cookie
//! backed admin session and list/query state, `util` holds the route-guard
//! decision and browser glue, and `pages`/`components` render on top.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
