//! Configuration data model and validation

use crate::error::{AppError, Result};
use crate::types::ProtocolMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the benchmark CSV files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory the chart files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Protocol modes to render charts for, in reporting order
    #[serde(default = "default_modes")]
    pub modes: Vec<String>,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            modes: default_modes(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the configured mode names into typed protocol modes
    pub fn protocol_modes(&self) -> Result<Vec<ProtocolMode>> {
        self.modes
            .iter()
            .map(|m| ProtocolMode::from_str(m))
            .collect()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.modes.is_empty() {
            return Err(AppError::config("At least one protocol mode must be selected"));
        }

        // Every mode name must resolve
        self.protocol_modes()?;

        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::config("Data directory cannot be empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(AppError::config("Output directory cannot be empty"));
        }

        Ok(())
    }

    /// Merge environment variable overrides into the configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(data_dir) = std::env::var("PTC_DATA_DIR") {
            if !data_dir.is_empty() {
                self.data_dir = PathBuf::from(data_dir);
            }
        }

        if let Ok(output_dir) = std::env::var("PTC_OUTPUT_DIR") {
            if !output_dir.is_empty() {
                self.output_dir = PathBuf::from(output_dir);
            }
        }

        if let Ok(modes) = std::env::var("PTC_MODES") {
            let parsed: Vec<String> = modes
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !parsed.is_empty() {
                self.modes = parsed;
            }
        }

        if let Ok(enable_color) = std::env::var("PTC_ENABLE_COLOR") {
            self.enable_color = enable_color.parse()?;
        }

        Ok(())
    }

    /// Check whether the data directory exists on disk
    pub fn data_dir_exists(&self) -> bool {
        Path::new(&self.data_dir).is_dir()
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_DATA_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_OUTPUT_DIR)
}

fn default_modes() -> Vec<String> {
    crate::defaults::DEFAULT_MODES
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
