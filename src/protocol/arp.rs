//! Decoded ARP notification events
//!
//! The controller's packet-decoding pipeline delivers each observed ARP
//! frame as a chain of decoded layers: the raw bytes, the Ethernet header,
//! and the ARP payload. Events missing any of the three layers are
//! considered incomplete and are ignored by the installer.

use super::MacAddr;
use std::net::Ipv4Addr;

/// EtherType carried by ARP frames
pub const ETHERTYPE_ARP: u16 = 0x0806;

/// ARP operation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ArpOp {
    Request = 1,
    Reply = 2,
}

impl ArpOp {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(ArpOp::Request),
            2 => Some(ArpOp::Reply),
            _ => None,
        }
    }
}

/// Raw frame bytes as observed at the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLayer {
    pub payload: Vec<u8>,
}

/// Decoded Ethernet header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetLayer {
    pub source: MacAddr,
    pub destination: MacAddr,
    pub ethertype: u16,
}

/// Decoded ARP payload fields
///
/// The protocol addresses are decoded for completeness; the reactive path
/// keys everything off the Ethernet-layer MAC addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpLayer {
    pub operation: ArpOp,
    pub sender_mac: MacAddr,
    pub sender_ip: Ipv4Addr,
    pub target_mac: MacAddr,
    pub target_ip: Ipv4Addr,
}

/// One decoded layer of a received packet chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacketLayer {
    Raw(RawLayer),
    Ethernet(EthernetLayer),
    Arp(ArpLayer),
}

/// An address-resolution notification delivered by the controller.
///
/// Delivery order and concurrency are controller-defined; events for the
/// same host pair are not guaranteed to arrive in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpEvent {
    pub chain: Vec<PacketLayer>,
}

impl ArpEvent {
    pub fn new(chain: Vec<PacketLayer>) -> Self {
        Self { chain }
    }

    /// Returns the raw, Ethernet, and ARP layers of a complete chain.
    ///
    /// `None` if any layer kind is missing. When a kind occurs more than
    /// once, the last occurrence wins.
    pub fn decoded(&self) -> Option<(&RawLayer, &EthernetLayer, &ArpLayer)> {
        let mut raw = None;
        let mut ethernet = None;
        let mut arp = None;

        for layer in &self.chain {
            match layer {
                PacketLayer::Raw(l) => raw = Some(l),
                PacketLayer::Ethernet(l) => ethernet = Some(l),
                PacketLayer::Arp(l) => arp = Some(l),
            }
        }

        Some((raw?, ethernet?, arp?))
    }
}
