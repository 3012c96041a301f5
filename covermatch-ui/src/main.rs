//! CoverMatch Page
//!
//! Health insurance recommendation page built with Leptos (WASM).
//!
//! # Features
//!
//! - Animated particle background
//! - Light/dark theme toggle
//! - Health profile form posting to `/predict`
//! - Recommendation cards with a suitability bar
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the CoverMatch server over HTTP; the API base can
//! be overridden with the `covermatch_api_url` local storage key.

use leptos::*;

mod animation;
mod api;
mod app;
mod components;
mod state;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
