//! # student-registry
//!
//! Leptos + WASM frontend for the student data entry application.
//! Replaces the React `frontend/` with a Rust-native UI layer.
//!
//! This crate contains the registration page, its form and roster components,
//! the client-side state models, and the REST bindings for the student
//! service. All durable state lives in the remote service; the crate is a
//! presentation layer around a validate → create → refresh cycle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered DOM into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
