//! Aspect-ratio-preserving raster resize.

use depth_common::{DepthError, DepthResult, GrayRaster};
use image::imageops::{self, FilterType};
use image::GrayImage;

/// Resize a grayscale raster to a target width, preserving aspect ratio.
///
/// The output height is `round(height * target_width / width)`; the two
/// axes are never scaled independently. Resampling uses Lanczos3, which
/// downsamples large grids to thumbnail width without aliasing artifacts.
///
/// Fails with `InvalidDimension` when the target width is zero or the
/// computed height rounds to zero.
pub fn resize_to_width(raster: &GrayRaster, target_width: u32) -> DepthResult<GrayRaster> {
    if target_width == 0 {
        return Err(DepthError::InvalidDimension(
            "target width must be positive".to_string(),
        ));
    }

    let src_width = raster.width() as u32;
    let src_height = raster.height() as u32;
    if src_width == 0 || src_height == 0 {
        return Err(DepthError::InvalidDimension(
            "cannot resize an empty raster".to_string(),
        ));
    }

    let target_height =
        (src_height as f64 * target_width as f64 / src_width as f64).round() as u32;
    if target_height == 0 {
        return Err(DepthError::InvalidDimension(format!(
            "target width {} collapses a {}x{} raster to zero height",
            target_width, src_width, src_height
        )));
    }

    let src = GrayImage::from_raw(src_width, src_height, raster.as_bytes().to_vec())
        .ok_or_else(|| {
            DepthError::InternalError("raster buffer does not match its dimensions".to_string())
        })?;
    let resized = imageops::resize(&src, target_width, target_height, FilterType::Lanczos3);

    Ok(GrayRaster::from_raw(
        target_width as usize,
        target_height as usize,
        resized.into_raw(),
    ))
}
