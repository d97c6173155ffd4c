//! Tracing/logging setup shared by binaries.

use tracing_subscriber::EnvFilter;

/// Default filter: `info` everywhere, plus the store engine's per-mutation
/// debug events.
pub const DEFAULT_FILTER: &str = "info,backoffice_core=debug";

/// Initialize process-wide tracing/logging.
///
/// Emits JSON log lines, filtered via `RUST_LOG` (falling back to
/// [`DEFAULT_FILTER`]). Safe to call multiple times; subsequent calls become
/// no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
