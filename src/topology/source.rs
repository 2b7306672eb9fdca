//! Topology snapshot collaborator boundary

/// Raw topology node record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: String,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Raw topology link record
///
/// Links are reported unidirectionally, so a physical link usually appears
/// as two records with source and destination swapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub source_node: String,
    pub source_port: String,
    pub dest_node: String,
    pub dest_port: String,
}

impl LinkRecord {
    pub fn new(
        source_node: impl Into<String>,
        source_port: impl Into<String>,
        dest_node: impl Into<String>,
        dest_port: impl Into<String>,
    ) -> Self {
        Self {
            source_node: source_node.into(),
            source_port: source_port.into(),
            dest_node: dest_node.into(),
            dest_port: dest_port.into(),
        }
    }
}

/// Read-once source of the topology snapshot.
///
/// Implementations read the controller's network-state store. A failed read
/// yields an empty sequence rather than an error; the graph build proceeds
/// with whatever was returned.
pub trait TopologySource: Send + Sync {
    fn all_nodes(&self) -> Vec<NodeRecord>;
    fn all_links(&self) -> Vec<LinkRecord>;
}
