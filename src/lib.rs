#![doc(test(attr(deny(warnings))))]

//! Ukay Core offers the inventory, breakeven accounting, and persistence
//! primitives that power resale-tracking workflows and CLIs.

pub mod accounting;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ukay Core tracing initialized.");
    });
}
