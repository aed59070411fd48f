#![doc(test(attr(deny(warnings))))]

//! Moneywise Core offers the pure decision logic behind a personal-finance
//! application: category-tree validation and monthly-report aggregation over
//! an externally loaded data snapshot.

pub mod catalog;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Moneywise Core tracing initialized.");
    });
}
