//! Protocol-level types
//!
//! Address types and the decoded packet-chain events delivered by the
//! controller's notification channel.

pub mod arp;
pub mod types;

pub use types::*;
