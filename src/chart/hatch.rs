//! Hatch pattern generation for bar segments
//!
//! SVG rectangles have no native hatching, so each segment is overlaid with
//! small marks generated in data coordinates: dots for the token phase,
//! rings for the access phase, diagonal strokes for the communication
//! residual.

use crate::types::Phase;
use plotters::element::{Circle, PathElement};
use plotters::style::{Color, ShapeStyle, BLACK};

/// Hatch pattern drawn over a bar segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HatchPattern {
    /// Small filled dots
    Dots,
    /// Small open rings
    Rings,
    /// Parallel diagonal strokes
    Diagonals,
}

impl HatchPattern {
    /// Pattern used for a protocol phase
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Token => HatchPattern::Dots,
            Phase::Access => HatchPattern::Rings,
            Phase::Communication => HatchPattern::Diagonals,
        }
    }
}

/// Axis-aligned bounds of one bar segment in data coordinates
#[derive(Debug, Clone, Copy)]
pub struct SegmentBounds {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl SegmentBounds {
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// Dot or ring marks covering a segment. `y_step` is the vertical mark
/// spacing in data units, derived from the chart's y-range so density stays
/// comparable across charts.
pub fn point_marks(
    pattern: HatchPattern,
    bounds: SegmentBounds,
    y_step: f64,
) -> Vec<Circle<(f64, f64), i32>> {
    let mut marks = Vec::new();
    if bounds.height() <= 0.0 || y_step <= 0.0 {
        return marks;
    }

    let (radius, style): (i32, ShapeStyle) = match pattern {
        HatchPattern::Dots => (1, BLACK.filled()),
        HatchPattern::Rings => (2, BLACK.stroke_width(1)),
        HatchPattern::Diagonals => return marks,
    };

    let columns = 3;
    let dx = bounds.width() / (columns as f64 + 1.0);

    let mut row = 0;
    loop {
        let y = bounds.y0 + y_step * (row as f64 + 0.5);
        if y >= bounds.y1 {
            break;
        }
        // Offset every other row for a staggered texture
        let shift = if row % 2 == 0 { 0.0 } else { dx / 2.0 };
        for col in 1..=columns {
            let x = bounds.x0 + dx * col as f64 + shift;
            if x < bounds.x1 {
                marks.push(Circle::new((x, y), radius, style));
            }
        }
        row += 1;
    }

    marks
}

/// Diagonal strokes covering a segment, clipped to its bounds
pub fn diagonal_marks(bounds: SegmentBounds, y_step: f64) -> Vec<PathElement<(f64, f64)>> {
    let mut marks = Vec::new();
    if bounds.height() <= 0.0 || y_step <= 0.0 {
        return marks;
    }

    let style: ShapeStyle = BLACK.stroke_width(1);
    let rise = y_step;

    // Strokes start below the segment so the lowest corner is covered too
    let mut y = bounds.y0 - rise;
    while y < bounds.y1 {
        let start_y = y.max(bounds.y0);
        let end_y = (y + rise).min(bounds.y1);
        if end_y > start_y {
            // Clip the 45-degree stroke to the segment's vertical extent
            let start_frac = (start_y - y) / rise;
            let end_frac = (end_y - y) / rise;
            let x_start = bounds.x0 + bounds.width() * start_frac;
            let x_end = bounds.x0 + bounds.width() * end_frac;
            marks.push(PathElement::new(
                vec![(x_start, start_y), (x_end, end_y)],
                style,
            ));
        }
        y += rise / 2.0;
    }

    marks
}
