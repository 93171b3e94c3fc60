//! HTTP handlers for the depth raster service.
//!
//! Provides endpoints for:
//! - `POST /process_image` - Ingest the configured CSV and replace the canonical image
//! - `GET /get_frames` - Render the grayscale and colorized artifacts for a depth range
//! - `GET /health` - Health check
//! - `GET /ready` - Readiness check
//! - `GET /metrics` - Prometheus metrics

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, instrument};
use uuid::Uuid;

use depth_common::{DepthError, DepthRange, DepthResult};
use grid_ingest::{ingest_csv, IngestOptions, IngestReport};

use crate::frames::{render_frames, FrameArtifacts};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for /get_frames.
#[derive(Debug, Deserialize)]
pub struct FrameQuery {
    pub depth_min: Option<i64>,
    pub depth_max: Option<i64>,
}

/// Response body for /process_image.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub message: String,
    pub image_id: Uuid,
    pub width: usize,
    pub height: usize,
}

impl From<IngestReport> for ProcessResponse {
    fn from(report: IngestReport) -> Self {
        Self {
            message: format!(
                "Processed {} rows into a {}x{} image",
                report.source_rows, report.width, report.height
            ),
            image_id: report.image_id,
            width: report.width,
            height: report.height,
        }
    }
}

/// Response body for /get_frames.
#[derive(Debug, Serialize)]
pub struct FramesResponse {
    pub original_image: String,
    pub colored_image: String,
}

impl From<FrameArtifacts> for FramesResponse {
    fn from(artifacts: FrameArtifacts) -> Self {
        Self {
            original_image: artifacts.original_image.display().to_string(),
            colored_image: artifacts.colored_image.display().to_string(),
        }
    }
}

/// Error body shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Map a pipeline error onto its HTTP response.
fn error_response(err: &DepthError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = Json(ErrorResponse {
        error: err.to_string(),
    });
    (status, body).into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /process_image - Run the ingest flow against the configured CSV
#[instrument(skip(state))]
pub async fn process_image_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    state.metrics.record_process_request();

    let csv_path = &state.config.data_csv;
    info!(csv = %csv_path.display(), "Received process request");

    let options = IngestOptions {
        target_width: state.config.target_width,
        ..IngestOptions::default()
    };

    match ingest_csv(&state.store, csv_path, &options).await {
        Ok(report) => {
            info!(
                id = %report.image_id,
                width = report.width,
                height = report.height,
                "Processing completed"
            );
            (StatusCode::OK, Json(ProcessResponse::from(report))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Processing failed");
            error_response(&e)
        }
    }
}

/// GET /get_frames - Render the artifact pair for a depth range
#[instrument(skip(state))]
pub async fn get_frames_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FrameQuery>,
) -> Response {
    state.metrics.record_frame_request();

    let Some(depth_min) = params.depth_min else {
        return error_response(&DepthError::MissingParameter("depth_min".to_string()));
    };
    let Some(depth_max) = params.depth_max else {
        return error_response(&DepthError::MissingParameter("depth_max".to_string()));
    };

    let range = DepthRange::new(depth_min, depth_max);

    match render_stored_frames(&state, range).await {
        Ok(artifacts) => {
            state.metrics.record_render(true);
            info!(
                depth_min = range.min,
                depth_max = range.max,
                colored = %artifacts.colored_image.display(),
                "Rendered frame pair"
            );
            (StatusCode::OK, Json(FramesResponse::from(artifacts))).into_response()
        }
        Err(e) => {
            state.metrics.record_render(false);
            error!(
                depth_min = range.min,
                depth_max = range.max,
                error = %e,
                "Frame rendering failed"
            );
            error_response(&e)
        }
    }
}

/// Fetch the canonical image and render both artifacts for the range.
async fn render_stored_frames(state: &AppState, range: DepthRange) -> DepthResult<FrameArtifacts> {
    let canonical = state
        .store
        .fetch_canonical()
        .await?
        .ok_or(DepthError::ImageNotFound)?;

    render_frames(
        &canonical.image_data,
        range,
        &state.config.original_dir,
        &state.config.colored_dir,
    )
}

/// GET /health - Health check
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "depth-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /ready - Readiness check (verifies database connectivity)
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    match state.store.canonical_count().await {
        Ok(_) => (StatusCode::OK, "Ready"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not ready"),
    }
}

/// GET /metrics - Prometheus metrics endpoint
pub async fn metrics_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let output = state.metrics.render_prometheus();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; version=0.0.4")
        .body(output.into())
        .unwrap()
}

// ============================================================================
// Router
// ============================================================================

/// Build the HTTP router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/process_image", post(process_image_handler))
        .route("/get_frames", get(get_frames_handler))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
