//! # client
//!
//! Leptos + WASM frontend for the component studio: a chat pane that turns
//! free-text prompts into rendered UI snippets with matching source code.
//!
//! Browser-only concerns (fetch, clock, console logging) sit behind the
//! `csr` feature so the crate also compiles natively and its unit tests run
//! under plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Browser entrypoint: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
