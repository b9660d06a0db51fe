//! Configuration types for a game run.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Path of the snapshot written after every iteration
    pub output_path: String,
    /// Random seed for reproducible tie-breaking (entropy when absent)
    pub seed: Option<u64>,
    /// Log filter directive, used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_path: "out.xml".to_string(),
            seed: None,
            log_filter: "info,life_world=info,life_game=info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&text)?;
        debug!(path = %path.display(), ?config, "Loaded run configuration");
        Ok(config)
    }
}
