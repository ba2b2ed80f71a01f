//! # news-client
//!
//! Leptos + WASM frontend for the S.TECH news portal: a public article feed,
//! a staff login gate, and an admin panel with create/update/delete over the
//! in-memory article list.
//!
//! This crate contains pages, components, application state, the remote
//! feed client, and browser storage helpers. The `hydrate` feature builds the
//! browser bundle; `ssr` is enabled by the server for rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
