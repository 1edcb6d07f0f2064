//! # Utility Library
//!
//! Small generic helpers shared across the workspace.

pub mod envs;
pub mod validation;
