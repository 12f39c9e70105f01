//! DevSummit registration page
//!
//! A server-rendered landing page with a light/dark theme toggle,
//! scroll-triggered reveal animations and a validated registration form,
//! built with Leptos and WebAssembly.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
