#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps an in-memory ledger of credit and debit
//! transactions per account, tagged with a fixed set of categories, and
//! serves them back sorted by date.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense tracker tracing initialized.");
    });
}
