//! # Request/Response Logging Middleware
//!
//! Per-request logging with method, path, status, latency, and the request
//! ID from [`RequestStamp`](super::RequestStamp). Applied only when the
//! debug flag is set; production runs rely on the `tower-http` trace layer.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::{info, warn};

use super::RequestStamp;

/// Request/response logging middleware.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|stamp| stamp.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let res = next.run(req).await;

    let status = res.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    if status.is_client_error() || status.is_server_error() {
        warn!(%request_id, %method, %path, %status, latency_ms, "request failed");
    } else {
        info!(%request_id, %method, %path, %status, latency_ms, "request handled");
    }

    res
}
