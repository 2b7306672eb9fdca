//! Reactive flow installation
//!
//! Consumes address-resolution events, computes the shortest path between
//! the observed hosts over the published topology snapshot, and programs a
//! mac-to-mac rule on every switch hop except the ingress edge the traffic
//! arrived on.

mod installer;
mod startup;

pub use installer::{switch_for_port, ReactiveFlowInstaller};
pub use startup::{spawn_event_loop, spawn_startup_build};
