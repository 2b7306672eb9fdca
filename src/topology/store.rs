//! Shared topology state
//!
//! Holds the graph snapshot read by concurrent event tasks and the
//! readiness gate flipped when the one-time startup build completes. The
//! graph is never mutated in place: the build produces a whole graph which
//! is swapped in atomically, so readers observe either the pre-build empty
//! graph or the fully built one.

use crate::topology::TopologyGraph;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Debug)]
pub struct TopologyStore {
    graph: RwLock<Arc<TopologyGraph>>,
    ready: AtomicBool,
}

impl Default for TopologyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologyStore {
    /// Create a store holding an empty graph, with the gate closed
    pub fn new() -> Self {
        Self {
            graph: RwLock::new(Arc::new(TopologyGraph::default())),
            ready: AtomicBool::new(false),
        }
    }

    /// Current graph snapshot
    pub fn snapshot(&self) -> Arc<TopologyGraph> {
        self.graph.read().unwrap().clone()
    }

    /// Publish the built graph and open the readiness gate.
    ///
    /// Called exactly once per process lifetime, by the deferred build
    /// task. The release store on `ready` orders the graph swap before the
    /// gate flip for readers using [`is_ready`](Self::is_ready).
    pub fn publish(&self, graph: TopologyGraph) {
        *self.graph.write().unwrap() = Arc::new(graph);
        self.ready.store(true, Ordering::Release);
    }

    /// Whether the startup build has completed
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TopologyConfig;

    #[test]
    fn test_store_starts_empty_and_not_ready() {
        let store = TopologyStore::new();
        assert!(!store.is_ready());
        assert_eq!(store.snapshot().node_count(), 0);
    }

    #[test]
    fn test_publish_swaps_snapshot_and_opens_gate() {
        let store = TopologyStore::new();
        let stale = store.snapshot();

        let mut graph = TopologyGraph::new(TopologyConfig::default());
        graph.add_node("openflow:1");
        store.publish(graph);

        assert!(store.is_ready());
        assert_eq!(store.snapshot().node_count(), 1);
        // A snapshot taken before publication still sees the empty graph
        assert_eq!(stale.node_count(), 0);
    }
}
