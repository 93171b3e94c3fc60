//! CSV grid loading.

use std::path::Path;

use depth_common::{DepthError, DepthResult, NumericGrid};

/// Load a numeric grid from a CSV file with a header row.
///
/// Every data cell parses to f32; empty or non-numeric cells become NaN so
/// the normalizer can apply its missing-value substitution. A row whose
/// field count differs from the header is a parse error, as is a file with
/// no data rows at all.
pub fn load_grid(path: &Path) -> DepthResult<NumericGrid> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DepthError::GridParse(format!("Failed to open {}: {}", path.display(), e)))?;

    let cols = reader
        .headers()
        .map_err(|e| DepthError::GridParse(format!("Failed to read CSV headers: {}", e)))?
        .len();

    let mut values = Vec::new();
    let mut rows = 0usize;
    for (row_no, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| DepthError::GridParse(format!("CSV row {}: {}", row_no, e)))?;
        for field in record.iter() {
            values.push(field.trim().parse::<f32>().unwrap_or(f32::NAN));
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(DepthError::GridParse(format!(
            "{} contains no data rows",
            path.display()
        )));
    }

    tracing::debug!("Loaded {}x{} grid from {}", rows, cols, path.display());
    Ok(NumericGrid::from_raw(rows, cols, values))
}
