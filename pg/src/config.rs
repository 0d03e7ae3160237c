//! Configuration for planguard

use eyre::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address prefix marking protected resources
    pub address_prefix: String,

    /// Default report format
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address_prefix: crate::DEFAULT_ADDRESS_PREFIX.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load config from an explicit file, or use defaults
    ///
    /// Nothing is discovered implicitly: without a path the built-in defaults
    /// apply, so the protected prefix only changes when asked to.
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        let Some(config_path) = path else {
            return Ok(Config::default());
        };

        let content = fs::read_to_string(config_path)
            .context(format!("Failed to read config from {}", config_path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .context(format!("Failed to parse config from {}", config_path.display()))?;
        debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, address_prefix: Option<String>, format: Option<OutputFormat>) -> Self {
        if let Some(prefix) = address_prefix {
            self.address_prefix = prefix;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
