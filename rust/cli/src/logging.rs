//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or
/// `holdem_engine=trace`.
pub const ENV_LOG: &str = "HOLDEM_LOG";

/// Installs a stderr subscriber filtered by `HOLDEM_LOG` (default `warn`).
/// Calling it again is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
