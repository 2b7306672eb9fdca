//! Reactive flow installer
//!
//! Per-event pipeline: decode check, readiness gate, source lookup,
//! shortest path, ingress exclusion, rule build and dispatch. Every step
//! that bails does so quietly; the worst case is that no rule is installed
//! for this flow, which heals on the next matching packet.

use crate::flow::{FlowProgrammingClient, FlowRuleBuilder};
use crate::protocol::arp::ArpEvent;
use crate::telemetry::MetricsRegistry;
use crate::topology::{shortest_path, TopologyStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ReactiveFlowInstaller {
    store: Arc<TopologyStore>,
    rules: FlowRuleBuilder,
    client: FlowProgrammingClient,
    metrics: Arc<MetricsRegistry>,
}

impl ReactiveFlowInstaller {
    pub fn new(
        store: Arc<TopologyStore>,
        rules: FlowRuleBuilder,
        client: FlowProgrammingClient,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            store,
            rules,
            client,
            metrics,
        }
    }

    /// Process one address-resolution event.
    ///
    /// Events with an incomplete layer chain, events arriving before the
    /// topology build has published, and events whose source host is not
    /// in the graph are dropped without rule installation. Otherwise one
    /// rule is submitted per path edge, skipping the ingress edge the
    /// traffic was observed arriving on.
    pub fn handle_event(&self, event: &ArpEvent) {
        self.metrics.events_received.inc();

        let Some((_raw, ethernet, _arp)) = event.decoded() else {
            self.metrics.events_incomplete.inc();
            return;
        };

        if !self.store.is_ready() {
            self.metrics.events_before_ready.inc();
            return;
        }

        let source = ethernet.source.to_string();
        let destination = ethernet.destination.to_string();
        let graph = self.store.snapshot();

        if graph.node(&source).is_none() {
            debug!(%source, "source host not in topology graph, ignoring event");
            self.metrics.events_unknown_source.inc();
            return;
        }

        let path = shortest_path(&graph, &source, &destination);
        if path.is_empty() {
            debug!(%source, %destination, "no path between hosts");
            self.metrics.paths_empty.inc();
            return;
        }

        // The hop the traffic arrived on is not a forwarding decision
        // point and must not be re-programmed
        let ingress = graph.link_endpoint(&source);

        for port in &path {
            if Some(port.as_str()) == ingress {
                continue;
            }
            let Some(switch) = switch_for_port(port) else {
                continue;
            };

            match self.rules.build(
                &switch,
                Some(ethernet.source),
                ethernet.destination,
                port,
                None,
            ) {
                Ok(flow) => {
                    info!(
                        flow_id = %flow.flow_id,
                        %switch,
                        out_port = %port,
                        %source,
                        %destination,
                        "installing mac-to-mac flow"
                    );
                    // The pending result is intentionally dropped: no
                    // waiting on the backend from the event path
                    let _ = self.client.submit(flow);
                }
                Err(e) => {
                    self.metrics.rules_rejected.inc();
                    warn!(%switch, out_port = %port, error = %e, "flow rule rejected");
                }
            }
        }
    }
}

/// Derive the switch identifier from a port identifier.
///
/// Port ids have the shape `<protocol>:<datapath>:<port>`; the switch id
/// is the first two components. Identifiers with any other number of
/// components (host-side ports, malformed ids) yield `None`.
pub fn switch_for_port(port: &str) -> Option<String> {
    let parts: Vec<&str> = port.split(':').collect();
    if parts.len() == 3 {
        Some(format!("{}:{}", parts[0], parts[1]))
    } else {
        None
    }
}
