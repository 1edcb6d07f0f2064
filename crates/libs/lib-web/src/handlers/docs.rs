//! # Documentation Handler
//!
//! Serves the generated OpenAPI document as JSON.

use axum::Json;
use utoipa::openapi::OpenApi;

use crate::openapi;

/// Serve the OpenAPI document.
///
/// **Route**: `GET /api-docs/openapi.json`
pub async fn openapi_json() -> Json<OpenApi> {
    Json(openapi::doc())
}
