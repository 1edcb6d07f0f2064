//! # Application Settings
//!
//! Startup-time settings loaded from environment variables with an optional
//! `.env` file overlay. Real environment variables take precedence over file
//! entries, and file entries take precedence over field defaults.
//!
//! The loader validates every field and collects **all** violations before
//! failing, so an operator sees the complete list in one startup attempt.
//! A [`Settings`] value that fails any constraint is never constructed.
//!
//! ## Settings Access
//!
//! There is no global accessor. [`Settings::load`] is called once in `main`
//! and the resulting value is passed explicitly to the components that need
//! it (router state, middleware). The value is immutable and freely
//! shareable across concurrently handled requests.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lib_utils::validation::validate_not_empty;

// region:    --- Environment variable names

const APP_ENV: &str = "APP_ENV";
const HOST: &str = "HOST";
const PORT: &str = "PORT";
const DATABASE_URL: &str = "DATABASE_URL";
const PAGINATION_DEFAULT_LIMIT: &str = "PAGINATION_DEFAULT_LIMIT";
const PAGINATION_MAX_LIMIT: &str = "PAGINATION_MAX_LIMIT";

// endregion: --- Environment variable names

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_PAGE_LIMIT: u32 = 50;
const DEFAULT_PAGE_MAX_LIMIT: u32 = 200;

/// Connection string scheme the service supports.
const DATABASE_SCHEME: &str = "postgresql://";

/// Deployment environment the service runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            "test" => Ok(AppEnv::Test),
            _ => Err("must be one of development, production, test".to_string()),
        }
    }
}

/// Validated application settings.
///
/// Every constructed instance satisfies all per-field and cross-field
/// constraints; construction either succeeds fully or fails with a
/// [`ConfigError`] listing every violation.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Deployment environment (`APP_ENV`), defaults to development.
    pub app_env: AppEnv,

    /// Interface the HTTP server binds to (`HOST`).
    pub host: String,

    /// TCP port the HTTP server binds to (`PORT`), 1-65535.
    pub port: u16,

    /// Database connection string (`DATABASE_URL`), required,
    /// must start with `postgresql://`. The scaffold validates it but opens
    /// no connection.
    pub database_url: String,

    /// Page size applied when a request specifies none
    /// (`PAGINATION_DEFAULT_LIMIT`), > 0.
    pub pagination_default_limit: u32,

    /// Upper bound for client-requested page sizes
    /// (`PAGINATION_MAX_LIMIT`), >= the default limit.
    pub pagination_max_limit: u32,
}

impl Settings {
    /// Load settings from the process environment with a `.env` overlay from
    /// the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_overlay(Path::new(".env"))
    }

    /// Load settings using an explicit overlay file path.
    ///
    /// The overlay file uses `KEY=VALUE` lines. A missing or unreadable file
    /// is not an error; the loader simply falls back to defaults for keys
    /// the environment does not provide.
    pub fn load_with_overlay(path: &Path) -> Result<Self, ConfigError> {
        let overlay = read_env_file(path);
        Self::resolve(|key| env::var(key).ok().or_else(|| overlay.get(key).cloned()))
    }

    /// Resolve and validate settings from an arbitrary key lookup.
    ///
    /// The lookup already encodes source precedence; [`Settings::load`]
    /// wires it to the process environment and the `.env` overlay. Tests
    /// drive this with plain maps to avoid mutating process-global state.
    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut violations: Vec<Violation> = Vec::new();
        let mut invalid =
            |field: &'static str, reason: String| violations.push(Violation { field, reason });

        // Placeholder values pushed alongside a violation are discarded on
        // the error path; a Settings is only built when no violation exists.
        let app_env = match lookup(APP_ENV) {
            Some(raw) => match raw.parse::<AppEnv>() {
                Ok(value) => value,
                Err(reason) => {
                    invalid(APP_ENV, reason);
                    AppEnv::Development
                }
            },
            None => AppEnv::Development,
        };

        let host = lookup(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        if let Err(reason) = validate_not_empty(&host, HOST) {
            invalid(HOST, reason);
        }

        let port = match lookup(PORT) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if (1..=65535).contains(&n) => n as u16,
                Ok(_) => {
                    invalid(PORT, "must be between 1 and 65535".to_string());
                    DEFAULT_PORT
                }
                Err(_) => {
                    invalid(PORT, "must be an integer between 1 and 65535".to_string());
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        let database_url = match lookup(DATABASE_URL) {
            Some(url) if url.starts_with(DATABASE_SCHEME) => url,
            Some(_) => {
                invalid(
                    DATABASE_URL,
                    format!("must start with \"{DATABASE_SCHEME}\""),
                );
                String::new()
            }
            None => {
                invalid(DATABASE_URL, "must be set".to_string());
                String::new()
            }
        };

        let mut limits_ok = true;
        let pagination_default_limit = match lookup(PAGINATION_DEFAULT_LIMIT) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    invalid(PAGINATION_DEFAULT_LIMIT, "must be > 0".to_string());
                    limits_ok = false;
                    DEFAULT_PAGE_LIMIT
                }
                Err(_) => {
                    invalid(PAGINATION_DEFAULT_LIMIT, "must be a positive integer".to_string());
                    limits_ok = false;
                    DEFAULT_PAGE_LIMIT
                }
            },
            None => DEFAULT_PAGE_LIMIT,
        };

        let pagination_max_limit = match lookup(PAGINATION_MAX_LIMIT) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) => n,
                Err(_) => {
                    invalid(PAGINATION_MAX_LIMIT, "must be a positive integer".to_string());
                    limits_ok = false;
                    DEFAULT_PAGE_MAX_LIMIT
                }
            },
            None => DEFAULT_PAGE_MAX_LIMIT,
        };

        // Cross-field constraint, checked only once both limits resolved
        // cleanly. Applies to defaulted values as well as explicit ones.
        if limits_ok && pagination_max_limit < pagination_default_limit {
            invalid(
                PAGINATION_MAX_LIMIT,
                format!("must be >= {PAGINATION_DEFAULT_LIMIT}"),
            );
        }

        if !violations.is_empty() {
            return Err(ConfigError { violations });
        }

        Ok(Self {
            app_env,
            host,
            port,
            database_url,
            pagination_default_limit,
            pagination_max_limit,
        })
    }

    /// Derived debug flag: verbose diagnostics are enabled only in
    /// development. Computed on read, not stored.
    pub fn is_debug(&self) -> bool {
        self.app_env == AppEnv::Development
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a dotenv-style file into a map without touching the process
/// environment, so source precedence stays explicit in the loader.
fn read_env_file(path: &Path) -> HashMap<String, String> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.filter_map(|item| item.ok()).collect(),
        Err(_) => HashMap::new(),
    }
}

// region:    --- ConfigError

/// A single violated constraint: which field, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub reason: String,
}

/// Aggregated configuration failure covering every invalid or missing field.
#[derive(Clone, Debug)]
pub struct ConfigError {
    pub violations: Vec<Violation>,
}

impl ConfigError {
    /// Whether the failure set includes a violation for `field`.
    pub fn involves(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let rendered: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.reason))
            .collect();
        write!(fmt, "{}", rendered.join("; "))
    }
}

impl std::error::Error for ConfigError {}

// endregion: --- ConfigError
