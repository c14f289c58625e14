//! EventTicket storefront
//!
//! Browser storefront for an event ticketing backend:
//! - Event listing, search and detail pages
//! - Live ticket counters over a per-event WebSocket channel
//! - Seat selection, checkout through an external payment gateway
//! - QR code tickets
//! - Admin dashboard with charts
//!
//! Built with Dioxus (router + fullstack). The `web` feature builds the WASM
//! client, the default `server` feature the native SSR host.

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Storefront logic (shared, DOM-free)
pub mod api;
pub mod auth;
pub mod charts;
pub mod checkout;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod live;
pub mod qr;
pub mod recommend;
pub mod seating;
pub mod session;

pub use error::{Result, StoreError};
