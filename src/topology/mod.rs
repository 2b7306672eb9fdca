//! Topology model
//!
//! Builds and serves the graph of switches, hosts, and links:
//! - Graph construction from raw controller topology records
//! - Shortest-path computation between graph nodes
//! - Snapshot publication for concurrent readers
//! - The snapshot-source collaborator boundary

mod graph;
mod path;
mod source;
mod store;

pub use graph::{Edge, Node, NodeRole, TopologyGraph};
pub use path::shortest_path;
pub use source::{LinkRecord, NodeRecord, TopologySource};
pub use store::TopologyStore;
