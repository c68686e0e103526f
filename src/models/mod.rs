//! Data models and structures for the timing chart generator

pub mod config;
pub mod timings;

// Re-export main model types
pub use config::Config;
pub use timings::{BitsizeSeries, ModeDataset, PhaseTimings};
