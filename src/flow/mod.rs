//! Flow rule construction and dispatch
//!
//! Turns a (switch, match, action) description into a validated flow
//! descriptor with process-unique identifiers, and submits descriptors to
//! the external flow backend without blocking the caller.

mod builder;
mod client;
mod descriptor;

pub use builder::{FlowRuleBuilder, COOKIE_BASE};
pub use client::{FlowBackend, FlowProgrammingClient};
pub use descriptor::{EthernetMatch, FlowAction, FlowDescriptor, MacRewrite, OFP_NO_BUFFER};
