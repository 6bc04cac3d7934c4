#![doc(test(attr(deny(warnings))))]

//! Split Register is the core of a ledger register view: it lays entries
//! out on a grid under several display modes, keeps the cursor on the entry
//! being edited across relayouts, and saves edits back into the ledger
//! inside a single begin/commit session.

pub mod config;
pub mod errors;
pub mod grid;
pub mod ledger;
pub mod register;
pub mod utils;

pub use config::RegisterConfig;
pub use errors::{RegisterError, RegisterResult};
pub use register::SplitRegister;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Split register tracing initialized.");
    });
}
