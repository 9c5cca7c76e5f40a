//! Diagnostic logging setup
//!
//! Log lines go to stderr so they never mix with paths printed on stdout.

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "FN_LOG";

/// Default filter when neither `FN_LOG` nor the config sets one
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter from `FN_LOG`, falling back to `level`
///
/// An unparsable directive falls back to [`DEFAULT_LEVEL`].
#[must_use]
pub fn build_filter(level: &str) -> EnvFilter {
    let directive = env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level.to_string());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: &str, ansi: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(io::stderr)
        .try_init();
}
