//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        // Try to load .env from current directory
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                println!("Loaded configuration from .env file");
            }
        } else if debug {
            println!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Protocol Timing Charts Configuration
#
# This file contains environment variables that can be used to configure
# the chart generator. Values specified here will be used as defaults,
# but can be overridden by command-line arguments.

# Directory containing the benchmark CSV files
# PTC_DATA_DIR=./data

# Directory the chart files are written to
# PTC_OUTPUT_DIR=./imgs

# Protocol modes to render, comma-separated
# PTC_MODES=TRA2,TDRA2,ARA2

# Enable colored output (true/false)
# PTC_ENABLE_COLOR=true

# Example: render a single mode from an alternative benchmark run
# PTC_DATA_DIR=./runs/2024-05-12/data
# PTC_MODES=ARA2
"#
        .to_string()
    }

    /// Save example .env file to disk
    pub fn save_example_env_file(path: &Path) -> Result<()> {
        use std::fs;

        let content = Self::create_example_env_content();
        fs::write(path, content)
            .map_err(|e| AppError::config(format!("Failed to write example .env file: {}", e)))?;

        Ok(())
    }
}
