//! # signin-form
//!
//! Leptos + WASM sign-in form. Collects a username and password, validates
//! them against static minimum-length rules, and posts them as JSON to a
//! configured sign-in endpoint, reporting the outcome inline.
//!
//! Browser builds enable the `csr` feature, which provides the `gloo-net`
//! transport and the `start` entry point. Without it the crate builds
//! natively so the form logic can be tested with a mock transport.

pub mod app;
pub mod config;
pub mod form;
pub mod net;
pub mod pages;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting sign-in form");
    leptos::mount::mount_to_body(app::App);
}
