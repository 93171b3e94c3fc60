//! Numeric grid input to the normalization pipeline.

/// A 2-D grid of measurements, row-major.
///
/// Rows are depth samples, columns are measurement channels. Missing or
/// unparseable cells are carried as NaN; the normalizer substitutes them
/// before computing the dynamic range.
#[derive(Debug, Clone)]
pub struct NumericGrid {
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

impl NumericGrid {
    /// Wrap an existing row-major value buffer.
    ///
    /// `values.len()` must equal `rows * cols`.
    pub fn from_raw(rows: usize, cols: usize, values: Vec<f32>) -> Self {
        assert_eq!(
            values.len(),
            rows * cols,
            "value buffer length must match dimensions"
        );
        Self { rows, cols, values }
    }

    /// Number of rows (depth samples).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (measurement channels).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.cols + col]
    }

    /// Check if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
