//! Log subscriber setup.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a subscriber that writes to standard error.
///
/// The filter comes from `RUST_LOG`; without it the level is `warn`,
/// or `debug` when `verbose` is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<(), TryInitError> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
}
