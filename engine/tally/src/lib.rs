//! Tally CLI - terminal host for the calculator engine.
//!
//! The engine speaks [`tally_ir::Key`] events; this crate owns the
//! other side of that contract: translating key tokens into events
//! ([`token`]) and rendering the view model back to the terminal.

use std::sync::Once;

pub mod token;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tally_eval=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
