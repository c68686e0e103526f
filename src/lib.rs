//! Protocol Timing Charts
//!
//! A benchmark report generator that reads per-configuration timing
//! summaries for a threshold access-control protocol from CSV files and
//! renders one grouped, stacked bar chart per protocol mode as an SVG file.

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{BitsizeSeries, Config, ModeDataset, PhaseTimings};
pub use types::{Phase, ProtocolMode, RunConfig, BITSIZES};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");


/// Default configuration values
pub mod defaults {
    /// Directory the benchmark CSV files are read from
    pub const DEFAULT_DATA_DIR: &str = "./data";
    /// Directory the chart files are written to
    pub const DEFAULT_OUTPUT_DIR: &str = "./imgs";
    /// Protocol modes rendered when no filter is given, in reporting order
    pub const DEFAULT_MODES: &[&str] = &["TRA2", "TDRA2", "ARA2"];
    /// Dealer counts for the four run configurations (TRA2 overrides to 1)
    pub const DEFAULT_DEALER_COUNTS: [u32; 4] = [2, 3, 4, 5];
    /// Guard counts for the four run configurations
    pub const DEFAULT_GUARD_COUNTS: [u32; 4] = [3, 5, 6, 8];
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
