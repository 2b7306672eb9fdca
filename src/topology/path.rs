//! Shortest-path computation
//!
//! Unweighted single-source shortest path over the topology graph,
//! breadth-first. Directed edges are traversed only in their recorded
//! direction; undirected edges both ways.
//!
//! Between equal-length paths the result is deterministic: neighbors are
//! expanded in ascending edge-id order (adjacency lists are kept sorted),
//! so the lexicographically-least edge sequence wins. The choice is
//! externally observable in which switch hops get programmed.

use crate::topology::TopologyGraph;
use std::collections::{HashMap, VecDeque};

/// Compute the shortest path from `source` to `dest`.
///
/// Returns the edge ids in traversal order. The path is empty when source
/// and destination coincide, when either node is absent from the graph, or
/// when the destination is unreachable; none of these are errors.
pub fn shortest_path(graph: &TopologyGraph, source: &str, dest: &str) -> Vec<String> {
    if source == dest || graph.node(source).is_none() || graph.node(dest).is_none() {
        return Vec::new();
    }

    // node -> (previous node, edge taken to reach it)
    let mut visited_from: HashMap<&str, (&str, &str)> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(source);

    'search: while let Some(current) = queue.pop_front() {
        for (edge, peer) in graph.neighbors(current) {
            let peer = peer.as_str();
            if peer == source || visited_from.contains_key(peer) {
                continue;
            }
            visited_from.insert(peer, (current, edge.as_str()));
            if peer == dest {
                break 'search;
            }
            queue.push_back(peer);
        }
    }

    let mut path = Vec::new();
    let mut current = dest;
    while current != source {
        match visited_from.get(current) {
            Some(&(prev, edge)) => {
                path.push(edge.to_string());
                current = prev;
            }
            // Destination never reached
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
