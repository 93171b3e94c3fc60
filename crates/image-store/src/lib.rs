//! Canonical image persistence for depth-raster services.

pub mod slot;

pub use slot::{CanonicalImage, ImageStore};
