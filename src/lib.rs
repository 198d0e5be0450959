//! # data-browser-ui
//!
//! Leptos + WASM landing page for a generic data browser: models grouped by
//! application, each linking to its default filtered view, followed by the
//! user's saved views.
//!
//! `query` owns the query-to-URL encoding, `catalog` and `config` describe
//! the page inputs, `state` holds the saved view shared across pages, and
//! `net`/`components`/`pages` build the UI on top.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod query;
pub mod state;

/// Browser entry point: rebuild `App` from the config embedded by the server
/// and hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(config) = config::read_embedded() else {
        leptos::logging::warn!("no page config embedded; skipping hydration");
        return;
    };
    leptos::mount::hydrate_body(move || view! { <App config/> });
}
