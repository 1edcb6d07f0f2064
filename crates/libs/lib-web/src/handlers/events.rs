//! # Events Handlers
//!
//! Placeholder route group for the events API, mounted under `/events`.

use axum::Router;

use crate::server::AppState;

/// Router for the events group.
///
/// No endpoints are implemented yet; requests under `/events` fall through
/// to the application's JSON 404 fallback. Endpoints register here as they
/// are built.
pub fn router() -> Router<AppState> {
    Router::new()
}
