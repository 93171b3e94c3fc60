//! Tests for aspect-ratio-preserving resize.

use depth_common::{DepthError, GrayRaster};
use raster_pipeline::resize_to_width;

fn gradient_raster(width: usize, height: usize) -> GrayRaster {
    let data = (0..width * height).map(|i| (i % 256) as u8).collect();
    GrayRaster::from_raw(width, height, data)
}

// ============================================================================
// Aspect ratio
// ============================================================================

#[test]
fn test_square_downscale_keeps_square() {
    let raster = gradient_raster(300, 300);
    let resized = resize_to_width(&raster, 150).unwrap();

    assert_eq!(resized.width(), 150);
    assert_eq!(resized.height(), 150);
}

#[test]
fn test_upscale_preserves_aspect_ratio() {
    let raster = gradient_raster(10, 20);
    let resized = resize_to_width(&raster, 30).unwrap();

    assert_eq!(resized.width(), 30);
    assert_eq!(resized.height(), 60);
}

#[test]
fn test_height_rounds_to_nearest() {
    // round(5 * 2 / 3) = round(3.33) = 3
    let raster = gradient_raster(3, 5);
    let resized = resize_to_width(&raster, 2).unwrap();

    assert_eq!(resized.width(), 2);
    assert_eq!(resized.height(), 3);
}

#[test]
fn test_same_width_preserves_dimensions() {
    let raster = gradient_raster(50, 80);
    let resized = resize_to_width(&raster, 50).unwrap();

    assert_eq!(resized.width(), 50);
    assert_eq!(resized.height(), 80);
}

// ============================================================================
// Invalid dimensions
// ============================================================================

#[test]
fn test_zero_target_width_is_rejected() {
    let raster = gradient_raster(10, 10);
    let err = resize_to_width(&raster, 0).unwrap_err();

    assert!(matches!(err, DepthError::InvalidDimension(_)));
    assert_eq!(err.http_status_code(), 400);
}

#[test]
fn test_collapsed_height_is_rejected() {
    // round(1 * 100 / 1000) = 0
    let raster = gradient_raster(1000, 1);
    let err = resize_to_width(&raster, 100).unwrap_err();

    assert!(matches!(err, DepthError::InvalidDimension(_)));
}

#[test]
fn test_empty_raster_is_rejected() {
    let raster = GrayRaster::new(0, 0);
    let err = resize_to_width(&raster, 10).unwrap_err();

    assert!(matches!(err, DepthError::InvalidDimension(_)));
}

// ============================================================================
// Output range
// ============================================================================

#[test]
fn test_downscale_of_uniform_raster_stays_uniform() {
    let raster = GrayRaster::from_raw(40, 40, vec![200u8; 1600]);
    let resized = resize_to_width(&raster, 10).unwrap();

    assert!(resized.as_bytes().iter().all(|&v| v == 200));
}
