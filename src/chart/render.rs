//! Grouped stacked bar chart rendering with plotters

use super::hatch::{self, HatchPattern, SegmentBounds};
use crate::{
    error::{AppError, Result},
    models::ModeDataset,
    types::{Phase, ProtocolMode},
};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Rendered image size in pixels
const CHART_SIZE: (u32, u32) = (800, 600);
/// Bar width in group units; one run configuration spans one unit
const BAR_WIDTH: f64 = 0.35;
/// Headroom above the tallest stacked bar
const Y_HEADROOM: f64 = 1.2;
/// Font family used throughout the chart
const FONT: &str = "sans-serif";

fn chart_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::chart(e.to_string())
}

/// Output file name for a mode's chart, derived solely from the mode label
pub fn chart_file_name(mode: ProtocolMode) -> String {
    format!("{}_times.svg", mode)
}

/// Renders one chart file per mode dataset into a fixed output directory
pub struct ChartRenderer {
    output_dir: PathBuf,
}

impl ChartRenderer {
    /// Create a renderer writing into the given directory
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Render the chart for one mode dataset, creating the output directory
    /// on first use. Returns the written file path.
    pub fn render(&self, dataset: &ModeDataset) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            AppError::io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let path = self.output_dir.join(chart_file_name(dataset.mode));
        render_mode_chart(dataset, &path)?;
        Ok(path)
    }
}

/// Render one mode's grouped stacked bar chart to an SVG file
pub fn render_mode_chart(dataset: &ModeDataset, path: &Path) -> Result<()> {
    let bar_count = dataset.bar_count();
    if bar_count == 0 {
        return Err(AppError::chart(format!(
            "Dataset for mode {} holds no bars",
            dataset.mode
        )));
    }

    let y_max = (dataset.max_total() * Y_HEADROOM).max(1.0);
    let y_step = y_max / 45.0;
    let series_count = dataset.series.len();

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(55)
        .y_label_area_size(60)
        .margin(10)
        .margin_top(55)
        .build_cartesian_2d(-0.6..(bar_count as f64 - 0.4), 0f64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_x_axis()
        .light_line_style(WHITE)
        .y_desc("Time (ms)")
        .y_labels(10)
        .label_style((FONT, 14))
        .axis_desc_style((FONT, 16))
        .draw()
        .map_err(chart_err)?;

    // Bars: one pair per run configuration, 512-bit left of center,
    // 1024-bit right of center, each stacked Token -> Access -> Communication
    for (k, series) in dataset.series.values().enumerate() {
        let center_offset = (k as f64 - (series_count as f64 - 1.0) / 2.0) * BAR_WIDTH;

        for i in 0..series.len() {
            let x_center = i as f64 + center_offset;
            let x0 = x_center - BAR_WIDTH / 2.0;
            let x1 = x_center + BAR_WIDTH / 2.0;

            let token = series.token[i];
            let access = series.access[i];
            let communication = series.communication[i];
            let base = token + access;

            let segments = [
                (Phase::Token, 0.0, token),
                (Phase::Access, token, token + access),
                (Phase::Communication, base, base + communication),
            ];

            for (phase, seg_y0, seg_y1) in segments {
                // White fill, black outline, then the phase's hatch marks
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(x0, seg_y0), (x1, seg_y1)],
                        WHITE.filled(),
                    )))
                    .map_err(chart_err)?;
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(x0, seg_y0), (x1, seg_y1)],
                        BLACK.stroke_width(1),
                    )))
                    .map_err(chart_err)?;

                let bounds = SegmentBounds::new(x0, x1, seg_y0.min(seg_y1), seg_y0.max(seg_y1));
                match HatchPattern::for_phase(phase) {
                    HatchPattern::Diagonals => {
                        chart
                            .draw_series(hatch::diagonal_marks(bounds, y_step))
                            .map_err(chart_err)?;
                    }
                    pattern => {
                        chart
                            .draw_series(hatch::point_marks(pattern, bounds, y_step))
                            .map_err(chart_err)?;
                    }
                }
            }

            // Error bars on the directly measured phases only
            chart
                .draw_series(std::iter::once(ErrorBar::new_vertical(
                    x_center,
                    token - series.token_std[i],
                    token,
                    token + series.token_std[i],
                    BLACK.filled(),
                    6,
                )))
                .map_err(chart_err)?;
            chart
                .draw_series(std::iter::once(ErrorBar::new_vertical(
                    x_center,
                    base - series.access_std[i],
                    base,
                    base + series.access_std[i],
                    BLACK.filled(),
                    6,
                )))
                .map_err(chart_err)?;
        }
    }

    // Legend: one label-only series per phase with a matching glyph
    for phase in Phase::stacked() {
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())
            .map_err(chart_err)?
            .label(phase.label())
            .legend(move |(x, y)| match phase {
                Phase::Token => Circle::new((x + 6, y), 2, BLACK.filled()).into_dyn(),
                Phase::Access => Circle::new((x + 6, y), 3, BLACK.stroke_width(1)).into_dyn(),
                Phase::Communication => {
                    PathElement::new(vec![(x, y + 4), (x + 12, y - 4)], BLACK.stroke_width(1))
                        .into_dyn()
                }
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, 14))
        .draw()
        .map_err(chart_err)?;

    // Primary axis: run-configuration labels drawn under the plot area
    for (i, label) in dataset.labels().iter().enumerate() {
        let (px, py) = chart.plotting_area().map_coordinate(&(i as f64, 0.0));
        root.draw(&Text::new(
            label.clone(),
            (px - 22, py + 12),
            (FONT, 14).into_font(),
        ))
        .map_err(chart_err)?;
    }
    root.draw(&Text::new(
        "Configuration",
        (CHART_SIZE.0 as i32 / 2 - 48, CHART_SIZE.1 as i32 - 24),
        (FONT, 16).into_font(),
    ))
    .map_err(chart_err)?;

    // Secondary axis: bit-size labels above each bar pair
    for (k, bitsize) in dataset.series.keys().enumerate() {
        let center_offset = (k as f64 - (series_count as f64 - 1.0) / 2.0) * BAR_WIDTH;
        for i in 0..bar_count {
            let (px, py) = chart
                .plotting_area()
                .map_coordinate(&(i as f64 + center_offset, y_max));
            root.draw(&Text::new(
                format!("{}b", bitsize),
                (px - 14, py - 20),
                (FONT, 13).into_font(),
            ))
            .map_err(chart_err)?;
        }
    }
    root.draw(&Text::new(
        "Bitsize of operations",
        (CHART_SIZE.0 as i32 / 2 - 70, 12),
        (FONT, 16).into_font(),
    ))
    .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
