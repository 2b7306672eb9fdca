//! Deferred startup build and event intake
//!
//! Two long-lived tasks wire the installer to its collaborators: a
//! one-shot timer that builds and publishes the topology graph after the
//! configured delay, and a pump that fans incoming events out to
//! short-lived processing tasks.

use crate::config::TopologyConfig;
use crate::protocol::arp::ArpEvent;
use crate::reactive::ReactiveFlowInstaller;
use crate::telemetry::MetricsRegistry;
use crate::topology::{TopologyGraph, TopologySource, TopologyStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// Spawn the one-shot topology build.
///
/// Sleeps for `delay`, reads the snapshot source once, builds the graph,
/// and publishes it, opening the readiness gate. Source read failures
/// surface as empty record sets and the build proceeds with whatever was
/// read.
pub fn spawn_startup_build(
    store: Arc<TopologyStore>,
    source: Arc<dyn TopologySource>,
    naming: TopologyConfig,
    delay: Duration,
    metrics: Arc<MetricsRegistry>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let nodes = source.all_nodes();
        let links = source.all_links();
        let graph = TopologyGraph::build(naming, &nodes, &links);

        metrics.set_graph_size(graph.node_count(), graph.edge_count());
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "topology graph published"
        );
        store.publish(graph);
    })
}

/// Spawn the event pump.
///
/// Receives address-resolution events from the typed channel and hands
/// each one to its own task; events carry no ordering guarantee and there
/// is no backpressure from the flow backend into this loop. The task ends
/// when all senders are dropped.
pub fn spawn_event_loop(
    installer: Arc<ReactiveFlowInstaller>,
    mut events: mpsc::Receiver<ArpEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let installer = Arc::clone(&installer);
            tokio::spawn(async move {
                installer.handle_event(&event);
            });
        }
    })
}
