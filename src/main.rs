//! AWEStore
//!
//! Electronics storefront and staff console built with Leptos (WASM).
//!
//! # Features
//!
//! - Product browsing, search, and client-side filtering
//! - Cart management with guest sessions
//! - Checkout with local form validation
//! - Order history and staff-side order/product/staff management
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives behind the AWEStore HTTP API; the client
//! keeps only session identifiers and transient view state.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod validate;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
