//! Reflow - reactive flow installation for an SDN controller
//!
//! Maintains a graph model of the network topology, reacts to observed ARP
//! traffic by computing shortest paths between the communicating hosts, and
//! programs mac-to-mac forwarding rules on every switch along the path.

pub mod config;
pub mod error;
pub mod flow;
pub mod protocol;
pub mod reactive;
pub mod telemetry;
pub mod topology;

pub use error::{Error, Result};
