//! Chart rendering
//!
//! Renders one grouped, stacked bar chart per protocol mode as an SVG file.
//! Layout follows the benchmark report convention: per run configuration a
//! 512-bit bar and a 1024-bit bar side by side, each stacked Token, Access,
//! Communication with hatch patterns and error bars on the measured phases.

mod hatch;
mod render;

pub use hatch::HatchPattern;
pub use render::{chart_file_name, render_mode_chart, ChartRenderer};
