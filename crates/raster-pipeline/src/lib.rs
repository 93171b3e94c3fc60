//! Image transform pipeline for depth-raster services.
//!
//! Implements the canonical flow:
//! - Numeric grid to grayscale normalization
//! - Aspect-ratio-preserving resize
//! - Row-range-selective colormap application
//! - PNG codec and atomic artifact output

pub mod artifact;
pub mod codec;
pub mod colorize;
pub mod colormap;
pub mod normalize;
pub mod resize;

pub use artifact::{write_artifact, ArtifactLabel};
pub use codec::{decode_gray_png, decode_rgb_png, encode_gray_png, encode_rgb_png};
pub use colorize::colorize_range;
pub use colormap::{Palette, VIRIDIS};
pub use normalize::{normalize, ValueColumns};
pub use resize::resize_to_width;
