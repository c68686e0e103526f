//! Command-line help system with examples and topic-specific guidance

use crate::config::env::EnvManager;
use colored::*;

/// Help system for the CLI application
pub struct HelpSystem;

impl HelpSystem {
    /// Create a new help system
    pub fn new() -> Self {
        Self
    }

    /// Display the main help message with all available options
    pub fn display_main_help(&self, use_colors: bool) -> String {
        let mut help = String::new();

        help.push_str(&self.format_header(use_colors));
        help.push('\n');
        help.push_str(&self.format_usage_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_examples_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_environment_section(use_colors));

        help
    }

    /// Display quick help for specific topics
    pub fn display_topic_help(&self, topic: &str, use_colors: bool) -> Option<String> {
        match topic.to_lowercase().as_str() {
            "data" | "input" => Some(self.format_data_help(use_colors)),
            "modes" | "mode" => Some(self.format_modes_help(use_colors)),
            "output" | "charts" => Some(self.format_output_help(use_colors)),
            "examples" => Some(self.format_examples_section(use_colors)),
            _ => None,
        }
    }

    /// Format the main header
    fn format_header(&self, use_colors: bool) -> String {
        let title = "Protocol Timing Charts";
        let subtitle = "Renders benchmark phase timings as grouped stacked bar charts";
        let version = env!("CARGO_PKG_VERSION");

        if use_colors {
            format!("{}\n{}\nVersion: {}\n", title.blue().bold(), subtitle, version)
        } else {
            format!("{}\n{}\nVersion: {}\n", title, subtitle, version)
        }
    }

    /// Format the usage section
    fn format_usage_section(&self, use_colors: bool) -> String {
        let heading = if use_colors {
            "USAGE:".green().bold().to_string()
        } else {
            "USAGE:".to_string()
        };

        format!(
            "{}\n  ptc [OPTIONS]\n\n  \
             Without options, reads ./data and writes one SVG chart per\n  \
             protocol mode (TRA2, TDRA2, ARA2) into ./imgs.\n",
            heading
        )
    }

    /// Format the examples section
    fn format_examples_section(&self, use_colors: bool) -> String {
        let heading = if use_colors {
            "EXAMPLES:".green().bold().to_string()
        } else {
            "EXAMPLES:".to_string()
        };

        format!(
            "{}\n  \
             # Render all modes from the default directories\n  \
             ptc\n\n  \
             # Render a single mode from an alternative benchmark run\n  \
             ptc --data-dir ./runs/latest/data --mode ARA2\n\n  \
             # Verbose run with per-configuration timing tables\n  \
             ptc --verbose\n\n  \
             # Plain output for CI logs\n  \
             ptc --no-color --out-dir ./artifacts\n",
            heading
        )
    }

    /// Format the environment variables section
    fn format_environment_section(&self, use_colors: bool) -> String {
        let heading = if use_colors {
            "ENVIRONMENT:".green().bold().to_string()
        } else {
            "ENVIRONMENT:".to_string()
        };

        format!(
            "{}\n  \
             PTC_DATA_DIR      Data directory (default ./data)\n  \
             PTC_OUTPUT_DIR    Output directory (default ./imgs)\n  \
             PTC_MODES         Comma-separated mode filter\n  \
             PTC_ENABLE_COLOR  Force color on/off (true/false)\n\n  \
             A .env file in the working directory is loaded first.\n",
            heading
        )
    }

    /// Format the data/input topic help
    fn format_data_help(&self, use_colors: bool) -> String {
        let heading = if use_colors {
            "INPUT DATA REFERENCE".blue().bold().to_string()
        } else {
            "INPUT DATA REFERENCE".to_string()
        };

        format!(
            "{}\n\n\
             The generator expects one CSV file per (mode, bitsize, configuration):\n\n  \
             times_dealers_<D>_guards_<G>_bitsize_<B>_mode_<M>.csv\n\n\
             Each file holds a header row followed by a single data row of six\n\
             comma-separated floating-point fields (all in milliseconds):\n\n  \
             token mean, token stddev, access mean, access stddev,\n  \
             total mean, total stddev\n\n\
             The communication time shown in charts is the residual\n\
             total - token - access; it is never read from the files.\n\n\
             TRA2 always uses dealers = 1; the other modes pair dealer counts\n\
             2,3,4,5 with guard counts 3,5,6,8.\n"
        , heading)
    }

    /// Format the modes topic help
    fn format_modes_help(&self, use_colors: bool) -> String {
        let heading = if use_colors {
            "PROTOCOL MODES".blue().bold().to_string()
        } else {
            "PROTOCOL MODES".to_string()
        };

        format!(
            "{}\n\n  \
             TRA2   Threshold resource access (single dealer)\n  \
             TDRA2  Threshold distributed resource access\n  \
             ARA2   Anonymous resource access\n\n\
             --mode can be repeated to render a subset; the default renders\n\
             all three in the order above. Mode names are case-insensitive.\n",
            heading
        )
    }

    /// Format the output topic help
    fn format_output_help(&self, use_colors: bool) -> String {
        let heading = if use_colors {
            "CHART OUTPUT".blue().bold().to_string()
        } else {
            "CHART OUTPUT".to_string()
        };

        format!(
            "{}\n\n\
             One SVG file per mode, named <MODE>_times.svg, written to the\n\
             output directory (created if missing).\n\n\
             Layout: per configuration a 512-bit and a 1024-bit bar, each\n\
             stacked Get Token / Get Access / Communication Time with hatch\n\
             patterns, error bars on the measured phases, configuration\n\
             labels below and bit-size labels above the bars.\n"
        , heading)
    }

    /// Example .env content, shared with the config module
    pub fn example_env_content(&self) -> String {
        EnvManager::create_example_env_content()
    }
}

impl Default for HelpSystem {
    fn default() -> Self {
        Self::new()
    }
}
