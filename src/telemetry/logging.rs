//! Logging initialization.
//!
//! RUST_LOG takes priority over the configured level; the configured
//! format selects between pretty, compact, and json output.

use crate::config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Initializes the logging system.
///
/// Safe to call more than once; later calls are no-ops (relevant for
/// tests, where several cases may initialize in one process).
pub fn init_logging(config: Option<&LogConfig>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = config.map_or("info", |c| match c.level.as_str() {
            level @ ("error" | "warn" | "info" | "debug" | "trace") => level,
            _ => "info",
        });
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.map(|c| c.format.as_str()) {
        Some("json") => builder.json().try_init(),
        Some("compact") => builder.compact().try_init(),
        _ => builder.try_init(),
    };
    // Already initialized: keep the existing subscriber
    let _ = result;
}
