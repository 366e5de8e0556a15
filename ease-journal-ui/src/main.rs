//! Ease Journal Web App
//!
//! Client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly and lists journal categories, users and entries served by the
//! Ease Journal API.
//!
//! # Architecture
//!
//! Fetching, decoding and per-view state live in the `ease-journal` crate.
//! This crate supplies the browser pieces: a `gloo-net` transport, console
//! logging, the router and the components.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod logging;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let loaded = config::embedded();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::init(&config.logging);
    if let Err(e) = &loaded {
        tracing::warn!("Using default config: {}", e);
    }
    tracing::info!("Ease Journal v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(move || view! { <app::App config=config /> });
}
