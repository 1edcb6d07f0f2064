//! # Error Response Schema
//!
//! Envelope returned by every failing endpoint:
//!
//! ```json
//! {"error": {"code": "not_found", "message": "no route for /nope"}}
//! ```

use serde::{Deserialize, Serialize};

/// Machine-readable error code plus a human-readable message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Top-level error envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
