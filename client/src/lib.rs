//! # client
//!
//! Leptos + WASM front-end for the component marketplace's live previews.
//!
//! Pages list submitted components as cards; each card hosts a
//! `LivePreview` that compiles its record through the `preview` crate and
//! mounts it in a sandboxed `srcdoc` frame once scrolled near the viewport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then hydrate the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(|| view! { <App/> });
}
