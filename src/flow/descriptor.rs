//! Flow descriptor types
//!
//! The match/action/metadata bundle describing one forwarding rule for one
//! switch, in backend-neutral form. Wire encoding belongs to the flow
//! backend collaborator.

use crate::protocol::MacAddr;

/// OpenFlow "no buffer" sentinel
pub const OFP_NO_BUFFER: u32 = 0xffff_ffff;

/// Ethernet match fields.
///
/// The destination is always matched; a `None` source matches any sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetMatch {
    pub source: Option<MacAddr>,
    pub destination: MacAddr,
}

/// One entry of a rule's action list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowAction {
    /// Forward out of the named port
    Output { port: String, max_length: u16 },
    /// Rewrite the source MAC before output
    SetSource(MacAddr),
    /// Rewrite the destination MAC before output
    SetDestination(MacAddr),
}

/// Requested MAC rewrite for a rule; source and destination rewrites are
/// mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacRewrite {
    Source(MacAddr),
    Destination(MacAddr),
}

/// One forwarding rule to install on one switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDescriptor {
    pub switch_id: String,
    pub table_id: u8,
    /// Process-unique rule identifier
    pub flow_id: String,
    /// Process-unique cookie
    pub cookie: u64,
    pub priority: u16,
    pub idle_timeout: u16,
    pub hard_timeout: u16,
    pub buffer_id: u32,
    pub eth_match: EthernetMatch,
    pub actions: Vec<FlowAction>,
}

impl FlowDescriptor {
    /// The output port of this rule's action list
    pub fn output_port(&self) -> Option<&str> {
        self.actions.iter().find_map(|action| match action {
            FlowAction::Output { port, .. } => Some(port.as_str()),
            _ => None,
        })
    }
}
