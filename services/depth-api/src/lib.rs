//! Depth raster API service library.
//!
//! This module exposes the internal modules for testing purposes.

pub mod config;
pub mod frames;
pub mod handlers;
pub mod metrics;
pub mod state;
