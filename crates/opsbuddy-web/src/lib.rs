//! OpsBuddy Web Frontend
//!
//! Leptos-based WASM components for rendering OpsBuddy chat messages.
//! The host chat app embeds [`components::ChatMessage`]; the bundled
//! [`App`] only mounts a preview of sample messages.

mod app;
pub mod components;
pub mod locale;
mod pages;
pub mod theme;

pub use app::App;
pub use pages::sample_messages;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
