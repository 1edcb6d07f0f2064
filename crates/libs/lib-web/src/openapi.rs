//! # OpenAPI Document
//!
//! Auto-published API documentation, served at `/api-docs/openapi.json`.

use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder, Paths};

/// Minimal OpenAPI specification for the events service.
///
/// The scaffold ships with an empty path set; endpoints register here as
/// they are implemented.
pub fn doc() -> OpenApi {
    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("events-service")
                .version(env!("CARGO_PKG_VERSION"))
                .description(Some(
                    "Minimal HTTP service scaffold with a validated environment configuration loader.",
                ))
                .build(),
        )
        .paths(Paths::new())
        .build()
}
