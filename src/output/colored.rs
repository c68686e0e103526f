//! Colored formatter implementation with terminal color support

use super::formatter::{FormattingOptions, OutputFormatter, PlainFormatter};
use crate::{error::Result, models::ModeDataset};
use colored::*;
use std::path::Path;

/// Colored formatter implementation; delegates table layout to the plain
/// formatter and adds ANSI styling around it
pub struct ColoredFormatter {
    plain_formatter: PlainFormatter,
    #[allow(dead_code)]
    options: FormattingOptions,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        let plain_formatter = PlainFormatter::new(options.clone());
        Self {
            plain_formatter,
            options,
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("{}\n", title.blue().bold()));
        out.push_str(&format!("{}\n", "=".repeat(title.len()).bright_black()));
        Ok(out)
    }

    fn format_mode_summary(&self, dataset: &ModeDataset) -> Result<String> {
        Ok(format!(
            "Mode {}: {} configurations x {} bitsizes, max stacked time {}",
            dataset.mode.to_string().cyan().bold(),
            dataset.bar_count(),
            dataset.series.len(),
            format!("{:.2} ms", dataset.max_total()).yellow()
        ))
    }

    fn format_timing_table(&self, dataset: &ModeDataset) -> Result<String> {
        // Table layout is identical; colors would break column alignment
        self.plain_formatter.format_timing_table(dataset)
    }

    fn format_chart_written(&self, dataset: &ModeDataset, path: &Path) -> Result<String> {
        Ok(format!(
            "{} Wrote {} chart to {}",
            "✓".green().bold(),
            dataset.mode.to_string().cyan(),
            path.display().to_string().underline()
        ))
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("{} {}", "ERROR:".red().bold(), error.red()))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", "WARNING:".yellow().bold(), warning.yellow()))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("{} {}", "OK:".green().bold(), message.green()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_messages_contain_text() {
        let formatter = ColoredFormatter::new(FormattingOptions::default());
        assert!(formatter.format_error("boom").unwrap().contains("boom"));
        assert!(formatter.format_warning("careful").unwrap().contains("careful"));
        assert!(formatter.format_success("done").unwrap().contains("done"));
    }

    #[test]
    fn test_colored_header_contains_title() {
        let formatter = ColoredFormatter::new(FormattingOptions::default());
        assert!(formatter.format_header("Report").unwrap().contains("Report"));
    }
}
