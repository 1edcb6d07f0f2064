//! # Health Handler
//!
//! Liveness probe for load balancers and orchestration.

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe.
///
/// **Route**: `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
