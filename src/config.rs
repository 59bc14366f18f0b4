use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level topf configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopfConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Persistence settings.
    #[serde(default)]
    pub persistence: PersistenceToml,
}

impl TopfConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub diagram: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistenceToml {
    #[serde(default = "default_global_peak")]
    pub global_peak: String,
    #[serde(default)]
    pub n_peaks: Option<usize>,
}

impl Default for PersistenceToml {
    fn default() -> Self {
        Self {
            global_peak: default_global_peak(),
            n_peaks: None,
        }
    }
}

fn default_global_peak() -> String {
    "range".to_string()
}
