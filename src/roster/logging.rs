//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Library code only emits events; the binary decides where they go. Logs are
//! written to stderr so stdout stays clean for the roster table and JSON.
//!
//! `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug` for
//! this crate when verbose output is requested.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,roster=debug";

pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
