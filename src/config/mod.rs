//! Configuration management
//!
//! All tunables for the reactive forwarding core live in one TOML file:
//! flow rule parameters, the startup build delay, topology identifier
//! conventions, and logging options. Every section has defaults, so an
//! empty file is a valid configuration.

mod types;

pub use types::*;

use crate::{Error, Result};
use std::path::Path;

/// Load and validate configuration from a TOML file
pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    let config: Config = toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
