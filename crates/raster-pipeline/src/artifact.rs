//! Deterministic artifact output with atomic writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use depth_common::{DepthError, DepthRange, DepthResult};
use tempfile::NamedTempFile;

/// Which rendering an artifact file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactLabel {
    /// The canonical grayscale rendering.
    Original,
    /// A colorized depth-range rendering.
    Range(DepthRange),
}

impl ArtifactLabel {
    /// Deterministic filename for this artifact.
    ///
    /// Callers can predict the path without round-tripping through the
    /// writer: `depth_original.png` or `depth_<min>_<max>.png`.
    pub fn file_name(&self) -> String {
        match self {
            ArtifactLabel::Original => "depth_original.png".to_string(),
            ArtifactLabel::Range(range) => format!("depth_{}.png", range.label()),
        }
    }
}

/// Write encoded image bytes under `folder` using the label's filename.
///
/// Creates the folder if missing and replaces any existing file with the
/// same name. Bytes land in a temporary file in the destination folder
/// first and are renamed into place, so a failed write never leaves a
/// partial artifact; the temporary file is removed on every exit path.
pub fn write_artifact(
    folder: &Path,
    label: ArtifactLabel,
    encoded: &[u8],
) -> DepthResult<PathBuf> {
    fs::create_dir_all(folder)?;

    let path = folder.join(label.file_name());
    let mut tmp = NamedTempFile::new_in(folder)?;
    tmp.write_all(encoded)?;
    tmp.persist(&path).map_err(|e| {
        DepthError::IoFailure(format!("Failed to persist {}: {}", path.display(), e))
    })?;

    tracing::debug!("Wrote artifact {} ({} bytes)", path.display(), encoded.len());
    Ok(path)
}
