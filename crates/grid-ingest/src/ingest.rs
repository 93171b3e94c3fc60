//! Grid-to-canonical-image ingestion flow.

use std::path::Path;

use tracing::info;
use uuid::Uuid;

use depth_common::DepthResult;
use image_store::ImageStore;
use raster_pipeline::{codec, normalize, resize_to_width, ValueColumns};

use crate::loader;

/// Width of the stored canonical raster unless overridden.
pub const DEFAULT_TARGET_WIDTH: u32 = 150;

/// Options for grid ingestion.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Width of the stored canonical raster
    pub target_width: u32,
    /// Measurement column selection
    pub value_columns: ValueColumns,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            value_columns: ValueColumns::SkipLeading(1),
        }
    }
}

/// Result of an ingestion operation.
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Stored record id
    pub image_id: Uuid,
    /// Rows in the source grid
    pub source_rows: usize,
    /// Columns in the source grid, identifier column included
    pub source_cols: usize,
    /// Canonical raster width
    pub width: usize,
    /// Canonical raster height
    pub height: usize,
    /// Encoded PNG size in bytes
    pub bytes_stored: usize,
}

/// Ingest a CSV grid: load, normalize, resize, encode, and replace the
/// stored canonical image.
///
/// The raster is resized before it is stored, so every later rendering
/// request works from the already-thumbnailed canonical image.
pub async fn ingest_csv(
    store: &ImageStore,
    csv_path: &Path,
    options: &IngestOptions,
) -> DepthResult<IngestReport> {
    info!("Ingesting grid from {}", csv_path.display());

    let grid = loader::load_grid(csv_path)?;
    let normalized = normalize(&grid, options.value_columns);
    let canonical = resize_to_width(&normalized, options.target_width)?;
    let png = codec::encode_gray_png(&canonical)?;

    let file_name = csv_path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| format!("{}.png", s))
        .unwrap_or_else(|| "full_image.png".to_string());
    let image_id = store.replace_canonical(&file_name, &png).await?;

    info!(
        "Stored canonical image {}: {}x{} from {} source rows",
        image_id,
        canonical.width(),
        canonical.height(),
        grid.rows()
    );

    Ok(IngestReport {
        image_id,
        source_rows: grid.rows(),
        source_cols: grid.cols(),
        width: canonical.width(),
        height: canonical.height(),
        bytes_stored: png.len(),
    })
}
