//! BlockTrace Marketing Site
//!
//! Leptos components for the landing page. Rendered on the server under the
//! `ssr` feature and hydrated in the browser under `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod sections;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
