//! Configuration module

use crate::{error::CliError, output::OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use textjust_engine::config::DEFAULT_PARALLEL_THRESHOLD;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Justification configuration
    #[serde(default)]
    pub justify: JustifyConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Render configuration as TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Justification-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct JustifyConfig {
    /// Default line width in bytes
    pub width: usize,
}

impl Default for JustifyConfig {
    fn default() -> Self {
        Self { width: 80 }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Word count at which lines are rendered in parallel
    pub parallel_threshold: usize,
}

impl PerformanceConfig {
    /// Thread count override, if any
    pub fn worker_threads(&self) -> Option<usize> {
        (self.threads > 0).then_some(self.threads)
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
