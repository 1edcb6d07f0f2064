//! # Core Library
//!
//! Settings loader, error types, and shared DTOs for the events service.

pub mod config;
pub mod dto;
pub mod error;

// Re-export commonly used types
pub use config::{AppEnv, ConfigError, Settings};
pub use error::{AppError, Result};
