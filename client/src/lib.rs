//! # blog-client
//!
//! Leptos + WASM frontend for a small multi-user blog backed by a hosted
//! Supabase project.
//!
//! This crate contains pages, components, application state, the injected
//! backend interface and its Supabase HTTP implementation. The `ssr` build is
//! linked into the host server for first render; the `hydrate` build runs in
//! the browser and performs every backend call.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).unwrap_or(());
    leptos::mount::hydrate_body(app::App);
}
