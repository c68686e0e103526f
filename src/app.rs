//! Main application orchestration and execution

use crate::{
    chart::ChartRenderer,
    cli::Cli,
    config::{display_config_summary, load_config, validate_config},
    dataset,
    error::Result,
    logging::Logger,
    output::OutputFormatterFactory,
};
use std::path::PathBuf;

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        Ok(Self { cli })
    }

    /// Run the application: load the dataset for every selected mode and
    /// render one chart per mode. Returns the written chart paths.
    pub fn run(self) -> Result<Vec<PathBuf>> {
        // Load and validate configuration
        let config = load_config(self.cli.clone())?;
        let logger = Logger::with_config("app", &config);

        if config.debug {
            println!(
                "Protocol Timing Charts v{} (built {})",
                crate::VERSION,
                env!("BUILD_TIME")
            );
            if let Some(commit) = option_env!("GIT_COMMIT") {
                println!("Commit: {}", commit);
            }
            println!("\nConfiguration Summary:");
            println!("{}", display_config_summary(&config));
            println!();
        }

        // Validate configuration with warnings
        let warnings = validate_config(&config)?;
        let formatter = OutputFormatterFactory::create_formatter(config.enable_color, config.verbose);

        if !warnings.is_empty() {
            for warning in &warnings {
                eprintln!("{}", warning.format(config.enable_color));
            }
        }

        let modes = config.protocol_modes()?;
        logger.info(&format!(
            "Rendering {} chart(s) from {}",
            modes.len(),
            config.data_dir.display()
        ));

        let renderer = ChartRenderer::new(&config.output_dir);
        let mut written = Vec::with_capacity(modes.len());

        for mode in modes {
            logger.debug(&format!("Loading dataset for mode {}", mode));
            let dataset = dataset::load_mode_dataset(&config.data_dir, mode)?;

            if config.verbose {
                println!("{}", formatter.format_mode_summary(&dataset)?);
                print!("{}", formatter.format_timing_table(&dataset)?);
            }

            let path = renderer.render(&dataset)?;
            println!("{}", formatter.format_chart_written(&dataset, &path)?);
            written.push(path);
        }

        println!(
            "{}",
            formatter.format_success(&format!(
                "{} chart(s) written to {}",
                written.len(),
                config.output_dir.display()
            ))?
        );

        Ok(written)
    }
}
