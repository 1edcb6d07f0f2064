//! # Web Library
//!
//! HTTP handlers, middleware, OpenAPI document, and server setup.

pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod server;

pub use server::{create_router, start_server, AppState};
