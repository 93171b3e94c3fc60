//! Tests for CSV grid loading.

use std::io::Write;

use depth_common::DepthError;
use grid_ingest::load_grid;
use raster_pipeline::{normalize, ValueColumns};

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_load_simple_grid() {
    let file = write_csv("depth,ch1,ch2\n100,1.5,2.5\n101,3.0,4.0\n");
    let grid = load_grid(file.path()).unwrap();

    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.get(0, 0), 100.0);
    assert_eq!(grid.get(0, 2), 2.5);
    assert_eq!(grid.get(1, 1), 3.0);
}

#[test]
fn test_empty_cells_become_nan() {
    let file = write_csv("depth,ch1,ch2\n100,,2.5\n101,3.0,\n");
    let grid = load_grid(file.path()).unwrap();

    assert!(grid.get(0, 1).is_nan());
    assert!(grid.get(1, 2).is_nan());
    assert_eq!(grid.get(1, 1), 3.0);
}

#[test]
fn test_non_numeric_cells_become_nan() {
    let file = write_csv("depth,ch1\n100,oops\n");
    let grid = load_grid(file.path()).unwrap();

    assert!(grid.get(0, 1).is_nan());
}

#[test]
fn test_whitespace_around_numbers_is_tolerated() {
    let file = write_csv("depth,ch1\n100, 7.5 \n");
    let grid = load_grid(file.path()).unwrap();

    assert_eq!(grid.get(0, 1), 7.5);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_ragged_row_is_a_parse_error() {
    let file = write_csv("depth,ch1,ch2\n100,1.0,2.0\n101,3.0\n");
    let err = load_grid(file.path()).unwrap_err();

    assert!(matches!(err, DepthError::GridParse(_)));
}

#[test]
fn test_header_only_file_is_a_parse_error() {
    let file = write_csv("depth,ch1,ch2\n");
    let err = load_grid(file.path()).unwrap_err();

    assert!(matches!(err, DepthError::GridParse(_)));
    assert!(err.to_string().contains("no data rows"));
}

#[test]
fn test_missing_file_is_a_parse_error() {
    let err = load_grid(std::path::Path::new("/nonexistent/data.csv")).unwrap_err();
    assert!(matches!(err, DepthError::GridParse(_)));
}

// ============================================================================
// Loader feeding the normalizer
// ============================================================================

#[test]
fn test_loaded_nan_cells_normalize_to_zero() {
    let file = write_csv("depth,ch1,ch2\n100,,10.0\n101,5.0,10.0\n");
    let grid = load_grid(file.path()).unwrap();
    let raster = normalize(&grid, ValueColumns::SkipLeading(1));

    // Missing cell pulls the min down to zero
    assert_eq!(raster.get(0, 0), 0);
    assert_eq!(raster.get(0, 1), 255);
    assert_eq!(raster.get(1, 0), 127);
}
