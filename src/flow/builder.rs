//! Flow rule builder
//!
//! Validates a (switch, match, action) description and produces a
//! [`FlowDescriptor`] carrying the next process-unique flow id and cookie.
//! Table id, priority, and timeouts come from configuration set once at
//! startup and apply uniformly to every rule this instance builds.

use crate::config::FlowConfig;
use crate::flow::{EthernetMatch, FlowAction, FlowDescriptor, MacRewrite, OFP_NO_BUFFER};
use crate::protocol::MacAddr;
use crate::{Error, Result};
use std::sync::atomic::{AtomicU64, Ordering};

/// First cookie value handed out; subsequent cookies count up from here
pub const COOKIE_BASE: u64 = 0x2a00_0000_0000_0000;

const FLOW_ID_PREFIX: &str = "reflow-";

/// OpenFlow output max-length for the packet-in portion
const OUTPUT_MAX_LENGTH: u16 = 0xffff;

#[derive(Debug)]
pub struct FlowRuleBuilder {
    config: FlowConfig,
    flow_id_seq: AtomicU64,
    cookie_seq: AtomicU64,
}

impl FlowRuleBuilder {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config,
            flow_id_seq: AtomicU64::new(0),
            cookie_seq: AtomicU64::new(COOKIE_BASE),
        }
    }

    /// Build a rule forwarding `destination`-addressed frames out of
    /// `output_port` on `switch_id`.
    ///
    /// A `None` source matches frames from any sender. An optional rewrite
    /// prepends a set-source or set-destination MAC action to the output.
    ///
    /// Fails with [`Error::InvalidRule`] when the output port is empty or
    /// when source and destination MAC coincide; callers are expected to
    /// have filtered the same-address case already, but the builder
    /// enforces it as its own contract.
    pub fn build(
        &self,
        switch_id: &str,
        source: Option<MacAddr>,
        destination: MacAddr,
        output_port: &str,
        rewrite: Option<MacRewrite>,
    ) -> Result<FlowDescriptor> {
        if output_port.is_empty() {
            return Err(Error::InvalidRule("output port must not be empty".into()));
        }
        if source == Some(destination) {
            return Err(Error::InvalidRule(format!(
                "source and destination MAC are the same: {}",
                destination
            )));
        }

        let output = FlowAction::Output {
            port: output_port.to_string(),
            max_length: OUTPUT_MAX_LENGTH,
        };
        let actions = match rewrite {
            Some(MacRewrite::Destination(mac)) => vec![FlowAction::SetDestination(mac), output],
            Some(MacRewrite::Source(mac)) => vec![FlowAction::SetSource(mac), output],
            None => vec![output],
        };

        let flow_id = format!(
            "{}{}",
            FLOW_ID_PREFIX,
            self.flow_id_seq.fetch_add(1, Ordering::Relaxed)
        );
        let cookie = self.cookie_seq.fetch_add(1, Ordering::Relaxed);

        Ok(FlowDescriptor {
            switch_id: switch_id.to_string(),
            table_id: self.config.table_id,
            flow_id,
            cookie,
            priority: self.config.priority,
            idle_timeout: self.config.idle_timeout,
            hard_timeout: self.config.hard_timeout,
            buffer_id: OFP_NO_BUFFER,
            eth_match: EthernetMatch {
                source,
                destination,
            },
            actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    const SRC: &str = "00:00:00:00:00:01";
    const DST: &str = "00:00:00:00:00:02";

    fn mac(s: &str) -> MacAddr {
        s.parse().unwrap()
    }

    fn builder() -> FlowRuleBuilder {
        FlowRuleBuilder::new(FlowConfig::default())
    }

    #[test]
    fn test_build_applies_configured_parameters() {
        let config = FlowConfig {
            table_id: 3,
            priority: 200,
            idle_timeout: 30,
            hard_timeout: 300,
        };
        let builder = FlowRuleBuilder::new(config);

        let flow = builder
            .build("openflow:1", Some(mac(SRC)), mac(DST), "openflow:1:2", None)
            .unwrap();

        assert_eq!(flow.switch_id, "openflow:1");
        assert_eq!(flow.table_id, 3);
        assert_eq!(flow.priority, 200);
        assert_eq!(flow.idle_timeout, 30);
        assert_eq!(flow.hard_timeout, 300);
        assert_eq!(flow.buffer_id, OFP_NO_BUFFER);
        assert_eq!(flow.eth_match.source, Some(mac(SRC)));
        assert_eq!(flow.eth_match.destination, mac(DST));
    }

    #[test]
    fn test_build_without_rewrite_outputs_only() {
        let flow = builder()
            .build("openflow:1", Some(mac(SRC)), mac(DST), "openflow:1:2", None)
            .unwrap();

        assert_eq!(flow.actions.len(), 1);
        assert_eq!(flow.output_port(), Some("openflow:1:2"));
    }

    #[test]
    fn test_build_with_destination_rewrite() {
        let new_dst = mac("00:00:00:00:00:aa");
        let flow = builder()
            .build(
                "openflow:1",
                Some(mac(SRC)),
                mac(DST),
                "openflow:1:2",
                Some(MacRewrite::Destination(new_dst)),
            )
            .unwrap();

        assert_eq!(flow.actions.len(), 2);
        assert_eq!(flow.actions[0], FlowAction::SetDestination(new_dst));
        assert!(matches!(flow.actions[1], FlowAction::Output { .. }));
    }

    #[test]
    fn test_build_with_source_rewrite() {
        let new_src = mac("00:00:00:00:00:bb");
        let flow = builder()
            .build(
                "openflow:1",
                None,
                mac(DST),
                "openflow:1:2",
                Some(MacRewrite::Source(new_src)),
            )
            .unwrap();

        assert_eq!(flow.actions[0], FlowAction::SetSource(new_src));
        assert!(matches!(flow.actions[1], FlowAction::Output { .. }));
    }

    #[test]
    fn test_build_omitted_source_matches_any() {
        let flow = builder()
            .build("openflow:1", None, mac(DST), "openflow:1:2", None)
            .unwrap();
        assert_eq!(flow.eth_match.source, None);
    }

    #[test]
    fn test_build_rejects_same_source_and_destination() {
        let err = builder()
            .build("openflow:1", Some(mac(DST)), mac(DST), "openflow:1:2", None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRule(_)));
    }

    #[test]
    fn test_build_rejects_empty_output_port() {
        let err = builder()
            .build("openflow:1", Some(mac(SRC)), mac(DST), "", None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRule(_)));
    }

    #[test]
    fn test_flow_ids_and_cookies_increase() {
        let builder = builder();
        let a = builder
            .build("openflow:1", None, mac(DST), "openflow:1:2", None)
            .unwrap();
        let b = builder
            .build("openflow:1", None, mac(DST), "openflow:1:2", None)
            .unwrap();

        assert_eq!(a.flow_id, "reflow-0");
        assert_eq!(b.flow_id, "reflow-1");
        assert_eq!(a.cookie, COOKIE_BASE);
        assert_eq!(b.cookie, COOKIE_BASE + 1);
    }

    #[test]
    fn test_identifiers_unique_under_contention() {
        let builder = Arc::new(builder());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let builder = Arc::clone(&builder);
            handles.push(std::thread::spawn(move || {
                let mut out = Vec::new();
                for _ in 0..250 {
                    let flow = builder
                        .build("openflow:1", None, mac(DST), "openflow:1:2", None)
                        .unwrap();
                    out.push((flow.flow_id, flow.cookie));
                }
                out
            }));
        }

        let mut flow_ids = HashSet::new();
        let mut cookies = HashSet::new();
        for handle in handles {
            for (flow_id, cookie) in handle.join().unwrap() {
                assert!(flow_ids.insert(flow_id), "duplicate flow id");
                assert!(cookies.insert(cookie), "duplicate cookie");
            }
        }
        assert_eq!(flow_ids.len(), 2000);
        assert_eq!(cookies.len(), 2000);
    }
}
