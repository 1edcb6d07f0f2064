//! # Data Transfer Objects (DTOs)
//!
//! Response payload structures shared across the HTTP surface.

pub mod error;

pub use error::*;
