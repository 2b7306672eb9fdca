//! Metrics collection for the reactive forwarding core.
//!
//! Event processing and flow submission are fire-and-forget, so these
//! counters are the only place their outcomes stay visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for thread-safe increment operations.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counter registry shared by the installer and the programming client.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    // Event dispositions
    /// Address-resolution events received from the channel.
    pub events_received: Counter,
    /// Events dropped for missing raw/Ethernet/ARP layers.
    pub events_incomplete: Counter,
    /// Events dropped because the readiness gate was still closed.
    pub events_before_ready: Counter,
    /// Events whose source host was not in the graph.
    pub events_unknown_source: Counter,
    /// Events whose path computation came back empty.
    pub paths_empty: Counter,

    // Flow programming outcomes
    /// Rules acknowledged by the flow backend.
    pub flows_programmed: Counter,
    /// Rules the backend failed to program (not retried).
    pub flow_submit_failures: Counter,
    /// Rule requests rejected by the builder's validation.
    pub rules_rejected: Counter,

    // Graph size gauges, set when the startup build publishes
    pub graph_nodes: AtomicU64,
    pub graph_edges: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the graph size gauges.
    pub fn set_graph_size(&self, nodes: usize, edges: usize) {
        self.graph_nodes.store(nodes as u64, Ordering::Relaxed);
        self.graph_edges.store(edges as u64, Ordering::Relaxed);
    }

    /// Exports all metrics as key-value pairs.
    pub fn export(&self) -> Vec<(String, u64)> {
        vec![
            ("events_received".into(), self.events_received.get()),
            ("events_incomplete".into(), self.events_incomplete.get()),
            ("events_before_ready".into(), self.events_before_ready.get()),
            (
                "events_unknown_source".into(),
                self.events_unknown_source.get(),
            ),
            ("paths_empty".into(), self.paths_empty.get()),
            ("flows_programmed".into(), self.flows_programmed.get()),
            (
                "flow_submit_failures".into(),
                self.flow_submit_failures.get(),
            ),
            ("rules_rejected".into(), self.rules_rejected.get()),
            ("graph_nodes".into(), self.graph_nodes.load(Ordering::Relaxed)),
            ("graph_edges".into(), self.graph_edges.load(Ordering::Relaxed)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_basic() {
        let counter = Counter::new();
        assert_eq!(counter.get(), 0);

        counter.inc();
        counter.inc();
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_registry_export() {
        let registry = MetricsRegistry::new();
        registry.events_received.inc();
        registry.flows_programmed.inc();
        registry.set_graph_size(4, 6);

        let metrics = registry.export();
        assert!(metrics.contains(&("events_received".into(), 1)));
        assert!(metrics.contains(&("flows_programmed".into(), 1)));
        assert!(metrics.contains(&("graph_nodes".into(), 4)));
        assert!(metrics.contains(&("graph_edges".into(), 6)));
    }
}
