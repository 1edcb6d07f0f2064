//! # Environment Variables
//!
//! Utilities for reading environment variables.

use std::env;

/// Get an environment variable by name.
pub fn get_env(name: &str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name.to_string()))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    MissingEnv(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
