//! MedConnect Dashboard
//!
//! Medical practice management dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Appointment book with calendar and text filtering
//! - Patient registry and scheduling directory
//! - Patient messaging (mock transport)
//! - Prescription ledger
//! - Editable digital business card
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every collection is an in-memory mock dataset; there is no
//! backend, persistence, or network protocol in this build, and all state
//! resets on reload.

use leptos::*;

mod app;
mod components;
mod data;
mod filter;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
