//! Configuration loader
//!
//! Loads `bim_agents.yaml` from the config directory. Configuration only
//! affects where artifacts go and how results are shown; the dispatch table,
//! rules and defaults are fixed in code.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "bim_agents.yaml";

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-friendly
    #[default]
    Pretty,
    /// Plain text, no colors
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BimConfig {
    /// Directory artifacts are saved into
    pub output_dir: PathBuf,
    /// Prefix of saved artifact file names
    pub file_prefix: String,
    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: String,
    pub format: OutputFormat,
}

impl Default for BimConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_prefix: "output_".to_string(),
            log_filter: "info".to_string(),
            format: OutputFormat::Pretty,
        }
    }
}

pub struct ConfigLoader {
    config_dir: String,
}

impl ConfigLoader {
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Create loader from BIM_CONFIG_DIR env var or default to "config"
    pub fn from_env() -> Self {
        let dir = std::env::var("BIM_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        Self::new(dir)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }

    /// Load the configuration; a missing file yields the defaults
    pub fn load(&self) -> Result<BimConfig> {
        let path = Path::new(&self.config_dir).join(CONFIG_FILE);
        if !path.exists() {
            debug!("No {} found, using defaults", path.display());
            return Ok(BimConfig::default());
        }

        info!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: BimConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }
}
