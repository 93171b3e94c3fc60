//! Grid ingestion for depth-raster services.
//!
//! Turns a CSV numeric grid into the stored canonical grayscale image:
//! load, normalize, resize, encode, replace.

pub mod ingest;
pub mod loader;

pub use ingest::{ingest_csv, IngestOptions, IngestReport, DEFAULT_TARGET_WIDTH};
pub use loader::load_grid;
