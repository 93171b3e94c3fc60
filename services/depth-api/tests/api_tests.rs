//! Tests for the depth raster API request/response contract.
//!
//! These tests focus on the HTTP-facing types and the error-to-status
//! mapping without requiring a database connection.

use depth_api::handlers::{ErrorResponse, FrameQuery, FramesResponse, ProcessResponse};
use depth_common::DepthError;
use grid_ingest::IngestReport;
use uuid::Uuid;

// ============================================================================
// Request parsing
// ============================================================================

#[test]
fn test_frame_query_with_both_parameters() {
    let query: FrameQuery = serde_json::from_str(r#"{"depth_min": 50, "depth_max": 120}"#).unwrap();
    assert_eq!(query.depth_min, Some(50));
    assert_eq!(query.depth_max, Some(120));
}

#[test]
fn test_frame_query_tolerates_missing_parameters() {
    let query: FrameQuery = serde_json::from_str(r#"{"depth_max": 120}"#).unwrap();
    assert_eq!(query.depth_min, None);
    assert_eq!(query.depth_max, Some(120));
}

#[test]
fn test_frame_query_accepts_negative_values() {
    // Range validation happens later, against the decoded row count
    let query: FrameQuery = serde_json::from_str(r#"{"depth_min": -5, "depth_max": 10}"#).unwrap();
    assert_eq!(query.depth_min, Some(-5));
}

// ============================================================================
// Response serialization
// ============================================================================

#[test]
fn test_process_response_serialization() {
    let report = IngestReport {
        image_id: Uuid::nil(),
        source_rows: 300,
        source_cols: 301,
        width: 150,
        height: 150,
        bytes_stored: 2048,
    };

    let json = serde_json::to_string(&ProcessResponse::from(report)).unwrap();
    assert!(json.contains("\"message\""));
    assert!(json.contains("\"image_id\""));
    assert!(json.contains("\"width\":150"));
    assert!(json.contains("\"height\":150"));
}

#[test]
fn test_frames_response_serialization() {
    let response = FramesResponse {
        original_image: "original_images/depth_original.png".to_string(),
        colored_image: "colored_images/depth_50_120.png".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"original_image\":\"original_images/depth_original.png\""));
    assert!(json.contains("\"colored_image\":\"colored_images/depth_50_120.png\""));
}

#[test]
fn test_error_body_shape() {
    let response = ErrorResponse {
        error: DepthError::MissingParameter("depth_min".to_string()).to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(
        json,
        r#"{"error":"Missing required parameter: depth_min"}"#
    );
}

// ============================================================================
// Error-to-status mapping used by the handlers
// ============================================================================

#[test]
fn test_request_errors_map_to_400() {
    assert_eq!(
        DepthError::MissingParameter("depth_max".to_string()).http_status_code(),
        400
    );
    assert_eq!(
        DepthError::OutOfRange("depth_min (120) must be less than or equal to depth_max (50)".to_string())
            .http_status_code(),
        400
    );
}

#[test]
fn test_missing_canonical_image_maps_to_404() {
    let err = DepthError::ImageNotFound;
    assert_eq!(err.http_status_code(), 404);
    assert_eq!(err.to_string(), "No image found in the database");
}

#[test]
fn test_pipeline_failures_map_to_500() {
    assert_eq!(
        DepthError::DecodeFailure("bad header".to_string()).http_status_code(),
        500
    );
    assert_eq!(
        DepthError::DatabaseError("connection refused".to_string()).http_status_code(),
        500
    );
}
