#![doc(test(attr(deny(warnings))))]

//! Order Forms provides the typed draft, validation schema, and submission
//! lifecycle behind the admin "new order" dialog.

pub mod config;
pub mod domain;
pub mod errors;
pub mod form;
pub mod service;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Order Forms tracing initialized.");
    });
}
