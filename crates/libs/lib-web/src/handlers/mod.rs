//! # HTTP Request Handlers
//!
//! Axum handlers organized by feature area.
//!
//! - **[`health`]**: liveness probe
//!   - `GET /health`
//! - **[`docs`]**: auto-published API documentation
//!   - `GET /api-docs/openapi.json`
//! - **[`events`]**: placeholder route group for the events API; currently
//!   exposes no endpoints

pub mod docs;
pub mod events;
pub mod health;
