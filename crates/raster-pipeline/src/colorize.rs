//! Row-range-selective colormap application.

use depth_common::{DepthRange, DepthResult, GrayRaster, RgbRaster};

use crate::colormap::VIRIDIS;

/// Colorize rows [min, max] of a grayscale raster, inclusive.
///
/// The output starts as the grayscale-as-RGB baseline (each intensity
/// replicated across the three channels); only rows inside the requested
/// range are overwritten with palette colors. Rows outside the range stay
/// bit-identical to the baseline.
///
/// Validates the range against the raster before touching any pixels and
/// fails with `OutOfRange` when min > max, min < 0, or max is past the
/// last row.
pub fn colorize_range(raster: &GrayRaster, range: DepthRange) -> DepthResult<RgbRaster> {
    let (min_row, max_row) = range.checked_bounds(raster.height())?;

    let mut rgb = RgbRaster::from_gray(raster);
    for row in min_row..=max_row {
        for col in 0..raster.width() {
            rgb.set(row, col, VIRIDIS.rgb(raster.get(row, col)));
        }
    }
    Ok(rgb)
}
