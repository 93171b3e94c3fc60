//! Common types and utilities shared across all depth-raster services.

pub mod error;
pub mod grid;
pub mod range;
pub mod raster;

pub use error::{DepthError, DepthResult};
pub use grid::NumericGrid;
pub use range::DepthRange;
pub use raster::{GrayRaster, RgbRaster};
