//! Protocol Timing Charts - Main CLI Application
//!
//! Renders one grouped stacked bar chart per protocol mode from benchmark
//! timing summary CSV files.

use clap::Parser;
use protocol_timing_charts::{
    app::App,
    cli::Cli,
    error::{AppError, ErrorReporter, Result},
};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();
    let use_color = cli.use_colors();
    let verbose = cli.verbose;

    // Handle the actual application logic
    if let Err(e) = run_application(cli) {
        eprintln!("Error: {}", e);

        // Verbose runs get the categorized report with recovery hints
        if verbose {
            ErrorReporter::new(use_color, true).report_error(&e);
        }

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    // Topic help short-circuits the run
    if cli.should_show_topic_help() {
        println!("{}", cli.display_help());
        return Ok(());
    }

    // Validate argument combinations before doing any work
    cli.validate().map_err(AppError::validation)?;

    if cli.debug {
        println!("{}", cli.get_config_summary());
    }

    let app = App::new(cli)?;
    app.run()?;

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file and PTC_* environment variables");
            eprintln!("  - Valid modes are TRA2, TDRA2 and ARA2");
            eprintln!("  - Run with --help-topic data for the input file layout");
        }
        AppError::Dataset(_) | AppError::Csv(_) => {
            eprintln!();
            eprintln!("Input data troubleshooting:");
            eprintln!("  - Verify the data directory with --data-dir");
            eprintln!("  - Each mode needs 8 CSV files (2 bitsizes x 4 configurations)");
            eprintln!("  - Each file needs a header row and one data row of 6 numbers");
        }
        AppError::Chart(_) | AppError::Io(_) => {
            eprintln!();
            eprintln!("Output troubleshooting:");
            eprintln!("  - Check the output directory is writable (--out-dir)");
            eprintln!("  - Check free disk space");
        }
        _ => {}
    }
}
