//! Frame rendering for depth range requests.

use std::path::{Path, PathBuf};

use depth_common::{DepthRange, DepthResult};
use raster_pipeline::{colorize_range, decode_gray_png, encode_rgb_png, write_artifact, ArtifactLabel};

/// File paths produced by a frame render.
#[derive(Debug, Clone)]
pub struct FrameArtifacts {
    pub original_image: PathBuf,
    pub colored_image: PathBuf,
}

/// Render the artifact pair for one depth range request.
///
/// Decodes the canonical PNG, colorizes the requested rows, and writes
/// both files. The range is validated against the decoded row count
/// before anything touches the filesystem, so a rejected request leaves
/// no artifacts behind. The grayscale artifact is the canonical bytes
/// unchanged; only the colorized artifact is re-encoded.
pub fn render_frames(
    canonical_png: &[u8],
    range: DepthRange,
    original_dir: &Path,
    colored_dir: &Path,
) -> DepthResult<FrameArtifacts> {
    let gray = decode_gray_png(canonical_png)?;
    let colored = colorize_range(&gray, range)?;
    let colored_png = encode_rgb_png(&colored)?;

    let original_image = write_artifact(original_dir, ArtifactLabel::Original, canonical_png)?;
    let colored_image = write_artifact(colored_dir, ArtifactLabel::Range(range), &colored_png)?;

    tracing::debug!(
        "Rendered {}x{} frame pair for rows {} to {}",
        gray.width(),
        gray.height(),
        range.min,
        range.max
    );

    Ok(FrameArtifacts {
        original_image,
        colored_image,
    })
}
