//! Telemetry module for logging and metrics.
//!
//! Provides:
//! - Logging configuration and initialization
//! - Counters for event dispositions and flow programming outcomes

mod logging;
mod metrics;

pub use logging::init_logging;
pub use metrics::{Counter, MetricsRegistry};
