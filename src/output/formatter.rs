//! Core formatting traits and the plain text implementation

use crate::{
    error::Result,
    models::ModeDataset,
};
use std::fmt::Write as _;
use std::path::Path;

/// Main trait for console output formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format a one-line summary for a loaded mode dataset
    fn format_mode_summary(&self, dataset: &ModeDataset) -> Result<String>;

    /// Format the per-configuration timing table for a mode dataset
    fn format_timing_table(&self, dataset: &ModeDataset) -> Result<String>;

    /// Format the "chart written" confirmation line
    fn format_chart_written(&self, dataset: &ModeDataset, path: &Path) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;

    /// Format success messages
    fn format_success(&self, message: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Enable verbose mode with detailed information
    pub verbose_mode: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
        }
    }
}

/// Plain text formatter without colors
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Access the formatting options
    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", title).ok();
        writeln!(out, "{}", "=".repeat(title.len())).ok();
        Ok(out)
    }

    fn format_mode_summary(&self, dataset: &ModeDataset) -> Result<String> {
        Ok(format!(
            "Mode {}: {} configurations x {} bitsizes, max stacked time {:.2} ms",
            dataset.mode,
            dataset.bar_count(),
            dataset.series.len(),
            dataset.max_total()
        ))
    }

    fn format_timing_table(&self, dataset: &ModeDataset) -> Result<String> {
        let mut out = String::new();
        for (bitsize, series) in &dataset.series {
            writeln!(out, "  {} bits:", bitsize).ok();
            writeln!(
                out,
                "    {:<10} {:>12} {:>12} {:>16}",
                "Config", "Token (ms)", "Access (ms)", "Comm. (ms)"
            )
            .ok();
            for i in 0..series.len() {
                writeln!(
                    out,
                    "    {:<10} {:>7.2} ±{:<4.2} {:>7.2} ±{:<4.2} {:>9.2} (±{:.2})",
                    series.labels[i],
                    series.token[i],
                    series.token_std[i],
                    series.access[i],
                    series.access_std[i],
                    series.communication[i],
                    series.communication_std[i],
                )
                .ok();
            }
        }
        Ok(out)
    }

    fn format_chart_written(&self, dataset: &ModeDataset, path: &Path) -> Result<String> {
        Ok(format!("Wrote {} chart to {}", dataset.mode, path.display()))
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("ERROR: {}", error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("WARNING: {}", warning))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("OK: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModeDataset, PhaseTimings};
    use crate::types::{ProtocolMode, BITSIZES};

    fn sample_dataset() -> ModeDataset {
        let mut dataset = ModeDataset::new(ProtocolMode::Tdra2);
        for bitsize in BITSIZES {
            let series = dataset.series.get_mut(&bitsize).unwrap();
            for config in ProtocolMode::Tdra2.run_configs() {
                series.push(
                    &config,
                    &PhaseTimings {
                        token_mean_ms: 120.0,
                        token_std_ms: 4.5,
                        access_mean_ms: 80.0,
                        access_std_ms: 3.0,
                        total_mean_ms: 250.0,
                        total_std_ms: 6.0,
                    },
                );
            }
        }
        dataset
    }

    #[test]
    fn test_plain_header() {
        let formatter = PlainFormatter::new(FormattingOptions::default());
        let header = formatter.format_header("Charts").unwrap();
        assert!(header.contains("Charts"));
        assert!(header.contains("======"));
    }

    #[test]
    fn test_mode_summary() {
        let formatter = PlainFormatter::new(FormattingOptions::default());
        let summary = formatter.format_mode_summary(&sample_dataset()).unwrap();
        assert!(summary.contains("Mode TDRA2"));
        assert!(summary.contains("4 configurations"));
        assert!(summary.contains("250.00 ms"));
    }

    #[test]
    fn test_timing_table_lists_all_configs() {
        let formatter = PlainFormatter::new(FormattingOptions::default());
        let table = formatter.format_timing_table(&sample_dataset()).unwrap();
        assert!(table.contains("512 bits:"));
        assert!(table.contains("1024 bits:"));
        assert!(table.contains("2D / 3G"));
        assert!(table.contains("5D / 8G"));
        assert!(table.contains("50.00")); // derived communication time
    }

    #[test]
    fn test_message_formats() {
        let formatter = PlainFormatter::new(FormattingOptions::default());
        assert_eq!(formatter.format_error("e").unwrap(), "ERROR: e");
        assert_eq!(formatter.format_warning("w").unwrap(), "WARNING: w");
        assert_eq!(formatter.format_success("s").unwrap(), "OK: s");
    }
}
