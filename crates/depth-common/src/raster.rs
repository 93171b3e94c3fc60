//! Raster buffers for normalized depth imagery.
//!
//! Both rasters are row-major: row index 0 is the shallowest depth sample,
//! and consecutive bytes within a row are consecutive measurement columns.

/// An 8-bit grayscale raster. One byte per pixel, values in [0, 255].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayRaster {
    /// Create a zero-filled raster of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height],
        }
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// `data.len()` must equal `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "pixel buffer length must match dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Raster width in pixels (measurement columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels (depth rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.width + col]
    }

    /// Set the pixel value at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.data[row * self.width + col] = value;
    }

    /// One full row of pixels.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// The underlying row-major byte buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster, returning its byte buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the raster has no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An 8-bit RGB raster. Three bytes per pixel, interleaved R, G, B.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbRaster {
    /// Wrap an existing row-major RGB buffer.
    ///
    /// `data.len()` must equal `width * height * 3`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height * 3,
            "pixel buffer length must match dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Build an RGB raster from a grayscale one by replicating each
    /// intensity across the three channels.
    pub fn from_gray(gray: &GrayRaster) -> Self {
        let mut data = Vec::with_capacity(gray.len() * 3);
        for &v in gray.as_bytes() {
            data.push(v);
            data.push(v);
            data.push(v);
        }
        Self {
            width: gray.width(),
            height: gray.height(),
            data,
        }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGB triple at (row, col).
    pub fn get(&self, row: usize, col: usize) -> [u8; 3] {
        let i = (row * self.width + col) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Set the RGB triple at (row, col).
    pub fn set(&mut self, row: usize, col: usize, rgb: [u8; 3]) {
        let i = (row * self.width + col) * 3;
        self.data[i] = rgb[0];
        self.data[i + 1] = rgb[1];
        self.data[i + 2] = rgb[2];
    }

    /// One full row of interleaved RGB bytes.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width * 3;
        &self.data[start..start + self.width * 3]
    }

    /// The underlying interleaved byte buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster, returning its byte buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
