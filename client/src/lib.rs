//! # client
//!
//! Leptos + WASM frontend for the Ezz Digital Solutions landing page.
//!
//! This crate contains the page shell, the section components, the small
//! state machines that drive scroll reveals, the workflow stepper and the
//! contact form, and the browser bindings that feed them. The server crate
//! renders it with the `ssr` feature; the browser hydrates it with `hydrate`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
