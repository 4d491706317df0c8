//! Logging initialization.
//!
//! The level is passed in by the embedding application; nothing in this
//! crate mutates process-global logger state on its own.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber at an explicit level.
///
/// Later calls are no-ops once a global subscriber is set.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

/// Install a fmt subscriber configured from `RUST_LOG`.
pub fn init_from_env() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
