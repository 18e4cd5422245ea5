//! Logging setup for the `anomaly-tree` binary.
//!
//! Installs a global `tracing` subscriber that writes to stderr.
//! The verbosity defaults to `warn` and follows `RUST_LOG` when set,
//! e.g. `RUST_LOG=anomaly_tree=debug` prints every chosen split.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initialize the global subscriber.
///
/// Returns `false` if a subscriber was already installed,
/// in which case the existing one is kept.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
