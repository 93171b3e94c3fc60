//! Depth range selection for colorized renderings.

use serde::{Deserialize, Serialize};

use crate::error::{DepthError, DepthResult};

/// An inclusive range of raster rows ("depths") to colorize.
///
/// Carries the caller's raw values; validation against a concrete raster
/// happens in [`checked_bounds`](DepthRange::checked_bounds) so that
/// out-of-range requests produce a message citing the valid bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthRange {
    pub min: i64,
    pub max: i64,
}

impl DepthRange {
    /// Create a new depth range from raw request values.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Validate this range against a raster with `row_count` rows.
    ///
    /// Returns the range as usable row indices, or `OutOfRange` when
    /// min > max, min < 0, or max is past the last row.
    pub fn checked_bounds(&self, row_count: usize) -> DepthResult<(usize, usize)> {
        if self.min > self.max {
            return Err(DepthError::OutOfRange(format!(
                "depth_min ({}) must be less than or equal to depth_max ({})",
                self.min, self.max
            )));
        }
        if self.min < 0 {
            return Err(DepthError::OutOfRange(format!(
                "depth_min ({}) must be at least 0",
                self.min
            )));
        }
        if self.max >= row_count as i64 {
            return Err(DepthError::OutOfRange(format!(
                "depth_max ({}) is out of range, max depth is {}",
                self.max,
                row_count as i64 - 1
            )));
        }
        Ok((self.min as usize, self.max as usize))
    }

    /// Label fragment used in colorized artifact filenames: `"<min>_<max>"`.
    pub fn label(&self) -> String {
        format!("{}_{}", self.min, self.max)
    }
}
