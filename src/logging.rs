//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with chat output on stdout.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Builds the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` turns on debug logs for this
/// crate.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(format!("{DEFAULT_FILTER},neo_chat=debug"))
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    })
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
