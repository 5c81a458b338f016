//! Check-in UI - browser binding layer for the slot booking pages.
//!
//! A WebAssembly module that enhances the server-rendered check-in pages:
//! it gates form submissions and destructive links, shows transient
//! banners, caches the last used display name, and wires keyboard
//! shortcuts. The server stays the single source of truth; this layer
//! never issues requests of its own, it only decides whether the
//! browser's native submissions and navigations may proceed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  dom (binding layer)                                         │
//! │  forms / links / alerts / keyboard / refresh / registry      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  controller (pure decisions)      rules (typed tables)      │
//! │  validate / confirm / format      fields, link patterns     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  services (external collaborators)                          │
//! │  bootstrap interop, local storage                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - build-time constants
//! - [`types`] - shared types (alerts, gate outcomes, errors)
//! - [`rules`] - declarative validation and confirmation tables
//! - [`controller`] - pure gating and formatting decisions
//! - [`services`] - Bootstrap interop and best-effort storage
//! - [`api`] - the `CheckinSystem` namespace exported to page scripts

use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod controller;
pub mod rules;
pub mod services;
pub mod types;

mod dom;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::CheckinSystem;
pub use types::{AlertKind, Field, FormView, Gate, UiError, UiResult};

// =============================================================================
// Application Entry Point
// =============================================================================

/// Wire the current page. Safe to call once per document.
pub fn boot() {
    dom::boot();
}

/// WASM entry point - called automatically when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🏓 Check-in UI - wiring page");

    boot();

    log::info!("Sistema de Check-in inicializado");
}
