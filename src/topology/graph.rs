//! Topology graph
//!
//! In-memory graph of switches, hosts, and links, built once from the raw
//! topology records read at startup. Edges are named by their switch-side
//! port identifier; host-attachment links additionally feed the link
//! endpoint map used to find the ingress hop for an observed flow.

use crate::config::TopologyConfig;
use crate::topology::{LinkRecord, NodeRecord};
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Role of a node, inferred from its identifier shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Switch,
    Host,
}

/// Graph node: a switch or a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub role: NodeRole,
}

/// Graph edge: a switch-to-switch link or a switch-to-host attachment,
/// identified by the switch-side port id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub directed: bool,
}

/// Graph of the network topology.
///
/// Populated by exactly one [`build`](TopologyGraph::build) per process
/// lifetime and read-only afterwards; concurrent readers get it through
/// [`TopologyStore`](crate::topology::TopologyStore) snapshots.
#[derive(Debug, Default)]
pub struct TopologyGraph {
    naming: TopologyConfig,
    nodes: HashMap<String, Node>,
    edges: HashMap<String, Edge>,
    /// node id -> (edge id, peer node id), kept sorted by edge id
    adjacency: HashMap<String, Vec<(String, String)>>,
    /// host-facing port id -> switch-side port id (= edge id)
    endpoints: HashMap<String, String>,
}

impl TopologyGraph {
    pub fn new(naming: TopologyConfig) -> Self {
        Self {
            naming,
            ..Self::default()
        }
    }

    /// Insert a node; a no-op if the id is already present
    pub fn add_node(&mut self, id: &str) {
        if self.nodes.contains_key(id) {
            return;
        }
        let role = if self.is_switch(id) {
            NodeRole::Switch
        } else {
            NodeRole::Host
        };
        self.nodes.insert(
            id.to_string(),
            Node {
                id: id.to_string(),
                role,
            },
        );
    }

    /// Insert an edge between two existing nodes.
    ///
    /// Fails with [`Error::DuplicateEdge`] if the edge id is already taken
    /// and [`Error::UnknownNode`] if either endpoint has not been added.
    pub fn add_edge(&mut self, id: &str, from: &str, to: &str, directed: bool) -> Result<()> {
        if self.edges.contains_key(id) {
            return Err(Error::DuplicateEdge { id: id.to_string() });
        }
        for node in [from, to] {
            if !self.nodes.contains_key(node) {
                return Err(Error::UnknownNode {
                    id: node.to_string(),
                });
            }
        }

        self.edges.insert(
            id.to_string(),
            Edge {
                id: id.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                directed,
            },
        );

        self.link(from, id, to);
        if !directed {
            self.link(to, id, from);
        }
        Ok(())
    }

    /// Record an adjacency entry, keeping the list sorted by edge id so
    /// path computation visits neighbors in a deterministic order.
    fn link(&mut self, node: &str, edge: &str, peer: &str) {
        let entry = (edge.to_string(), peer.to_string());
        let list = self.adjacency.entry(node.to_string()).or_default();
        let pos = list.binary_search(&entry).unwrap_or_else(|p| p);
        list.insert(pos, entry);
    }

    /// Build the graph from one topology snapshot.
    ///
    /// Node and host-port identifiers are stripped of the host prefix. For
    /// each link, the switch-side port becomes the edge id and the opposite
    /// port is recorded in the endpoint map. An edge is directed when both
    /// endpoint nodes are switches. Links are reported once per direction,
    /// so a duplicate edge id is expected and skipped; links naming nodes
    /// absent from the node records are skipped with a warning.
    pub fn build(naming: TopologyConfig, nodes: &[NodeRecord], links: &[LinkRecord]) -> Self {
        let mut graph = Self::new(naming);

        for record in nodes {
            let id = graph.strip_host_prefix(&record.id);
            debug!(node = %id, "adding topology node");
            graph.add_node(&id);
        }

        for link in links {
            let source = graph.strip_host_prefix(&link.source_node);
            let dest = graph.strip_host_prefix(&link.dest_node);

            let (edge_id, other_port) = if graph.is_switch(&link.source_port) {
                (
                    link.source_port.clone(),
                    graph.strip_host_prefix(&link.dest_port),
                )
            } else {
                (
                    link.dest_port.clone(),
                    graph.strip_host_prefix(&link.source_port),
                )
            };
            graph.endpoints.insert(other_port, edge_id.clone());

            let directed = graph.is_switch(&source) && graph.is_switch(&dest);
            match graph.add_edge(&edge_id, &source, &dest, directed) {
                Ok(()) => {
                    debug!(edge = %edge_id, %source, %dest, directed, "adding topology edge");
                }
                Err(Error::DuplicateEdge { .. }) => {
                    // The reverse direction of an already-seen link
                }
                Err(e) => {
                    warn!(edge = %edge_id, error = %e, "skipping link record");
                }
            }
        }

        graph
    }

    /// Switch-side port paired with a host-facing port, if known
    pub fn link_endpoint(&self, host_facing_port: &str) -> Option<&str> {
        self.endpoints.get(host_facing_port).map(String::as_str)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Outgoing (edge id, peer node id) pairs, sorted by edge id
    pub fn neighbors(&self, id: &str) -> &[(String, String)] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_switch(&self, id: &str) -> bool {
        id.starts_with(&self.naming.switch_prefix)
    }

    fn strip_host_prefix(&self, id: &str) -> String {
        id.strip_prefix(&self.naming.host_prefix)
            .unwrap_or(id)
            .to_string()
    }
}
