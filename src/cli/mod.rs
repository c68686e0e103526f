//! Command-line interface module with topic-based help

pub mod help;

pub use help::HelpSystem;

use clap::{ArgAction, Parser};

/// Protocol Timing Charts - renders benchmark phase timings as stacked bar charts
#[derive(Parser, Debug, Clone)]
#[command(name = "protocol-timing-charts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the benchmark CSV files
    #[arg(short = 'd', long)]
    pub data_dir: Option<String>,

    /// Directory the chart files are written to
    #[arg(short = 'o', long)]
    pub out_dir: Option<String>,

    /// Protocol mode to render (can be used multiple times; default: all)
    #[arg(long = "mode", action = ArgAction::Append)]
    pub modes: Vec<String>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Show help for specific topic (data, modes, output, examples)
    #[arg(long, value_name = "TOPIC")]
    pub help_topic: Option<String>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        // Mode names must be resolvable
        for mode in &self.modes {
            if mode.parse::<crate::types::ProtocolMode>().is_err() {
                return Err(format!(
                    "Unknown protocol mode '{}' (expected TRA2, TDRA2 or ARA2)",
                    mode
                ));
            }
        }

        Ok(())
    }

    /// Check if help should be displayed for a specific topic
    pub fn should_show_topic_help(&self) -> bool {
        self.help_topic.is_some()
    }

    /// Get the help topic if specified
    pub fn get_help_topic(&self) -> Option<&str> {
        self.help_topic.as_deref()
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }

    /// Display help for the specified topic or main help
    pub fn display_help(&self) -> String {
        let help_system = HelpSystem::new();
        let use_colors = self.use_colors();

        if let Some(topic) = &self.help_topic {
            help_system.display_topic_help(topic, use_colors).unwrap_or_else(|| {
                format!(
                    "Unknown help topic: '{}'\n\nAvailable topics: data, modes, output, examples\n\n{}",
                    topic,
                    help_system.display_main_help(use_colors)
                )
            })
        } else {
            help_system.display_main_help(use_colors)
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Configuration Summary:\n");
        summary.push_str(&format!(
            "  Data directory: {}\n",
            self.data_dir.as_deref().unwrap_or(crate::defaults::DEFAULT_DATA_DIR)
        ));
        summary.push_str(&format!(
            "  Output directory: {}\n",
            self.out_dir.as_deref().unwrap_or(crate::defaults::DEFAULT_OUTPUT_DIR)
        ));
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        if !self.modes.is_empty() {
            summary.push_str(&format!("  Mode filter: {}\n", self.modes.join(", ")));
        }

        summary
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    // Check for common environment variables that indicate color support
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check for NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for FORCE_COLOR environment variable
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Default to true on Unix-like systems, false elsewhere
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
