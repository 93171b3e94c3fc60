//! Numeric grid to grayscale normalization.

use depth_common::{GrayRaster, NumericGrid};

/// Which grid columns carry measurement values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueColumns {
    /// Every column is a measurement channel.
    All,
    /// Skip this many leading identifier columns.
    SkipLeading(usize),
}

impl ValueColumns {
    fn first_index(&self) -> usize {
        match self {
            ValueColumns::All => 0,
            ValueColumns::SkipLeading(n) => *n,
        }
    }
}

/// Normalize a numeric grid into an 8-bit grayscale raster.
///
/// Selects the measurement columns, substitutes zero for missing or
/// non-finite cells, then linearly rescales the global [min, max] of the
/// substituted values onto [0, 255] with truncation.
///
/// The substituted zeros participate in the min/max computation, so a grid
/// whose true minimum is positive gets pulled down by missing cells. A grid
/// with no dynamic range (min == max) maps to an all-zero raster of the same
/// shape instead of failing.
///
/// # Arguments
/// - `grid`: Input numeric grid (rows = depth samples)
/// - `columns`: Selector for the measurement columns
///
/// # Returns
/// A grayscale raster with one pixel per selected cell.
pub fn normalize(grid: &NumericGrid, columns: ValueColumns) -> GrayRaster {
    let first_col = columns.first_index().min(grid.cols());
    let width = grid.cols() - first_col;
    let height = grid.rows();

    let mut substituted = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in first_col..grid.cols() {
            let v = grid.get(row, col);
            substituted.push(if v.is_finite() { v } else { 0.0 });
        }
    }

    if substituted.is_empty() {
        return GrayRaster::new(width, height);
    }

    let (min_val, max_val) = substituted
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });

    // Constant input has no dynamic range; render it uniformly dark
    // rather than dividing by zero.
    if min_val == max_val {
        return GrayRaster::new(width, height);
    }

    let range = max_val - min_val;
    let pixels = substituted
        .iter()
        .map(|&v| ((v - min_val) / range * 255.0) as u8)
        .collect();

    GrayRaster::from_raw(width, height, pixels)
}
