//! Error types for depth-raster services.

use thiserror::Error;

/// Result type alias using DepthError.
pub type DepthResult<T> = Result<T, DepthError>;

/// Primary error type for depth-raster operations.
#[derive(Debug, Error)]
pub enum DepthError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Depth range out of range: {0}")]
    OutOfRange(String),

    // === Data Errors ===
    #[error("No image found in the database")]
    ImageNotFound,

    #[error("Failed to parse grid data: {0}")]
    GridParse(String),

    #[error("Failed to decode stored image: {0}")]
    DecodeFailure(String),

    // === Storage Errors ===
    #[error("Database error: {0}")]
    DatabaseError(String),

    // === Infrastructure Errors ===
    #[error("I/O failure: {0}")]
    IoFailure(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl DepthError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            DepthError::MissingParameter(_)
            | DepthError::InvalidDimension(_)
            | DepthError::OutOfRange(_) => 400,

            DepthError::ImageNotFound => 404,

            _ => 500,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for DepthError {
    fn from(err: std::io::Error) -> Self {
        DepthError::IoFailure(err.to_string())
    }
}

impl From<serde_json::Error> for DepthError {
    fn from(err: serde_json::Error) -> Self {
        DepthError::InternalError(format!("JSON error: {}", err))
    }
}
