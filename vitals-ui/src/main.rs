//! Vitals Dashboard
//!
//! Health tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Stat tiles with optional pie charts
//! - Progress, activity and diet cards
//! - Accent and background color pickers
//! - Collapsible sidebar on small screens
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All card content comes from the `vitals` crate; the only
//! runtime state is the session's preferences.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
