//! API Client
//!
//! Single point of outbound HTTP communication with the AWEStore service.

pub mod client;

pub use client::*;
