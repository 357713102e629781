//! # client
//!
//! Leptos frontend for the Gatehouse authentication screens.
//!
//! The crate renders the sign-in, sign-up and plan selection screens inside a
//! shared centered shell whose width follows the active route (see
//! [`components::auth_layout`]). It is rendered on the server by the `server`
//! crate (`ssr` feature) and hydrated in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating gatehouse client");
    leptos::mount::hydrate_body(app::App);
}
