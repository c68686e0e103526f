//! Configuration validation utilities and rules

use crate::{
    dataset,
    error::Result,
    models::Config,
};
use std::path::Path;

/// Configuration validator with advanced validation rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration with comprehensive checks
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        // Basic validation (already done in Config::validate)
        config.validate()?;

        warnings.extend(Self::validate_data_dir(config)?);
        warnings.extend(Self::validate_output_dir(config)?);
        warnings.extend(Self::validate_mode_selection(config)?);

        Ok(warnings)
    }

    /// Check the data directory and the expected input files
    fn validate_data_dir(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        if !config.data_dir_exists() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!(
                    "Data directory '{}' does not exist; loading will fail",
                    config.data_dir.display()
                ),
            ));
            return Ok(warnings);
        }

        // Report every expected file that is missing up front
        for mode in config.protocol_modes()? {
            let missing = dataset::missing_files(&config.data_dir, mode);
            if !missing.is_empty() {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Warning,
                    format!(
                        "Mode {}: {} of {} expected CSV files missing (first: {})",
                        mode,
                        missing.len(),
                        dataset::expected_file_count(),
                        missing[0].display()
                    ),
                ));
            }
        }

        Ok(warnings)
    }

    /// Check the output directory
    fn validate_output_dir(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        if !Path::new(&config.output_dir).is_dir() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!(
                    "Output directory '{}' does not exist and will be created",
                    config.output_dir.display()
                ),
            ));
        }

        Ok(warnings)
    }

    /// Check the mode selection for duplicates
    fn validate_mode_selection(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();
        let modes = config.protocol_modes()?;

        for (i, mode) in modes.iter().enumerate() {
            if modes[..i].contains(mode) {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Info,
                    format!("Mode {} selected more than once; the chart will be rendered twice", mode),
                ));
            }
        }

        Ok(warnings)
    }
}

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationLevel {
    Info,
    Warning,
}

impl ValidationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationLevel::Info => "INFO",
            ValidationLevel::Warning => "WARN",
        }
    }
}

/// Non-fatal configuration finding reported before the run
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        if use_color {
            use colored::Colorize;
            match self.level {
                ValidationLevel::Info => format!("[{}] {}", self.level.as_str().cyan(), self.message),
                ValidationLevel::Warning => {
                    format!("[{}] {}", self.level.as_str().yellow().bold(), self.message)
                }
            }
        } else {
            format!("[{}] {}", self.level.as_str(), self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
