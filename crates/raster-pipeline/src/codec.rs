//! PNG codec for canonical raster persistence.
//!
//! The canonical image is stored and shipped as PNG because the format is
//! lossless: decoding a stored raster recovers the exact normalized pixel
//! values the colorizer depends on.

use std::io::Cursor;

use depth_common::{DepthError, DepthResult, GrayRaster, RgbRaster};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageFormat};

/// Encode a grayscale raster as PNG bytes.
pub fn encode_gray_png(raster: &GrayRaster) -> DepthResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(Cursor::new(&mut out))
        .write_image(
            raster.as_bytes(),
            raster.width() as u32,
            raster.height() as u32,
            ColorType::L8,
        )
        .map_err(|e| DepthError::InternalError(format!("Failed to encode PNG: {}", e)))?;
    Ok(out)
}

/// Encode an RGB raster as PNG bytes.
pub fn encode_rgb_png(raster: &RgbRaster) -> DepthResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(Cursor::new(&mut out))
        .write_image(
            raster.as_bytes(),
            raster.width() as u32,
            raster.height() as u32,
            ColorType::Rgb8,
        )
        .map_err(|e| DepthError::InternalError(format!("Failed to encode PNG: {}", e)))?;
    Ok(out)
}

/// Decode stored PNG bytes back into a grayscale raster.
///
/// Non-grayscale input is converted to luma, so the result is always one
/// byte per pixel. Undecodable bytes are a `DecodeFailure`.
pub fn decode_gray_png(png_data: &[u8]) -> DepthResult<GrayRaster> {
    let img = image::load_from_memory_with_format(png_data, ImageFormat::Png)
        .map_err(|e| DepthError::DecodeFailure(format!("Failed to decode PNG: {}", e)))?;
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    Ok(GrayRaster::from_raw(
        width as usize,
        height as usize,
        gray.into_raw(),
    ))
}

/// Decode PNG bytes into an RGB raster.
pub fn decode_rgb_png(png_data: &[u8]) -> DepthResult<RgbRaster> {
    let img = image::load_from_memory_with_format(png_data, ImageFormat::Png)
        .map_err(|e| DepthError::DecodeFailure(format!("Failed to decode PNG: {}", e)))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(RgbRaster::from_raw(
        width as usize,
        height as usize,
        rgb.into_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_round_trip_is_lossless() {
        let raster = GrayRaster::from_raw(3, 2, vec![0, 64, 128, 192, 255, 7]);
        let png = encode_gray_png(&raster).unwrap();
        let decoded = decode_gray_png(&png).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_png_signature_present() {
        let raster = GrayRaster::from_raw(2, 2, vec![1, 2, 3, 4]);
        let png = encode_gray_png(&raster).unwrap();
        assert_eq!(&png[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_rgb_round_trip_is_lossless() {
        let gray = GrayRaster::from_raw(4, 3, vec![9u8; 12]);
        let mut rgb = RgbRaster::from_gray(&gray);
        rgb.set(2, 1, [253, 231, 37]);

        let png = encode_rgb_png(&rgb).unwrap();
        let decoded = decode_rgb_png(&png).unwrap();
        assert_eq!(decoded, rgb);
    }

    #[test]
    fn test_garbage_bytes_are_a_decode_failure() {
        let err = decode_gray_png(b"definitely not a png").unwrap_err();
        assert!(matches!(err, DepthError::DecodeFailure(_)));
        assert_eq!(err.http_status_code(), 500);
    }
}
