//! Configuration types

use crate::{Error, Result};
use serde::Deserialize;

/// Top-level configuration (reflow.toml)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub flow: FlowConfig,
    #[serde(default)]
    pub startup: StartupConfig,
    #[serde(default)]
    pub topology: TopologyConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Parameters applied uniformly to every flow rule built by this process.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    /// OpenFlow table the rules are written to
    #[serde(default)]
    pub table_id: u8,
    /// Priority for every installed rule
    #[serde(default = "default_priority")]
    pub priority: u16,
    /// Idle timeout in seconds (0 = no expiry)
    #[serde(default)]
    pub idle_timeout: u16,
    /// Hard timeout in seconds (0 = no expiry)
    #[serde(default)]
    pub hard_timeout: u16,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            table_id: 0,
            priority: default_priority(),
            idle_timeout: 0,
            hard_timeout: 0,
        }
    }
}

fn default_priority() -> u16 {
    10
}

/// One-shot startup timer settings.
///
/// The topology graph is built once, this long after process start. Events
/// arriving before the build completes are dropped, not queued.
#[derive(Debug, Clone, Deserialize)]
pub struct StartupConfig {
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            delay_secs: default_delay_secs(),
        }
    }
}

fn default_delay_secs() -> u64 {
    60
}

/// Identifier conventions used to classify topology records.
///
/// Host node and host-port identifiers carry `host_prefix`, which is
/// stripped when building the graph; switch node and switch-port
/// identifiers start with `switch_prefix`.
#[derive(Debug, Clone, Deserialize)]
pub struct TopologyConfig {
    #[serde(default = "default_host_prefix")]
    pub host_prefix: String,
    #[serde(default = "default_switch_prefix")]
    pub switch_prefix: String,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            host_prefix: default_host_prefix(),
            switch_prefix: default_switch_prefix(),
        }
    }
}

fn default_host_prefix() -> String {
    "host:".to_string()
}

fn default_switch_prefix() -> String {
    "openflow".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: pretty, compact, json
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Check configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.topology.host_prefix.is_empty() {
            return Err(Error::Config("topology.host_prefix must not be empty".into()));
        }
        if self.topology.switch_prefix.is_empty() {
            return Err(Error::Config(
                "topology.switch_prefix must not be empty".into(),
            ));
        }
        match self.log.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(Error::Config(format!("unknown log level: {}", other)));
            }
        }
        match self.log.format.as_str() {
            "pretty" | "compact" | "json" => {}
            other => {
                return Err(Error::Config(format!("unknown log format: {}", other)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_controller_module() {
        let config = Config::default();
        assert_eq!(config.flow.table_id, 0);
        assert_eq!(config.flow.priority, 10);
        assert_eq!(config.flow.idle_timeout, 0);
        assert_eq!(config.flow.hard_timeout, 0);
        assert_eq!(config.startup.delay_secs, 60);
        assert_eq!(config.topology.host_prefix, "host:");
        assert_eq!(config.topology.switch_prefix, "openflow");
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        config.validate().unwrap();
        assert_eq!(config.flow.priority, 10);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [flow]
            priority = 100

            [startup]
            delay_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.flow.priority, 100);
        assert_eq!(config.flow.table_id, 0);
        assert_eq!(config.startup.delay_secs, 5);
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let config: Config = toml::from_str(
            r#"
            [log]
            level = "verbose"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let config: Config = toml::from_str(
            r#"
            [topology]
            switch_prefix = ""
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
