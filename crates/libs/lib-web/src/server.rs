//! # Server Setup
//!
//! Router construction and HTTP server startup.
//!
//! Settings are injected explicitly: [`create_router`] takes the loaded
//! [`Settings`] and stores it in [`AppState`], so handlers and middleware
//! read configuration from router state instead of ambient globals.

use axum::extract::{FromRef, State};
use axum::middleware::map_response_with_state;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use lib_core::config::Settings;
use lib_core::error::AppError;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::middleware::{log_requests, stamp_req};

// region:    --- AppState

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

impl FromRef<AppState> for Settings {
    fn from_ref(state: &AppState) -> Self {
        state.settings.clone()
    }
}

// endregion: --- AppState

// region:    --- Server Setup

/// Initialize and start the HTTP server.
///
/// Binds to `host:port` from the validated settings and serves until the
/// process exits.
pub async fn start_server(settings: Settings) -> anyhow::Result<()> {
    let bind_address = settings.bind_address();
    let app = create_router(settings);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("server ready: http://{}", bind_address);
    log_routes();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router with all routes and middleware.
pub fn create_router(settings: Settings) -> Router {
    let debug = settings.is_debug();
    let state = AppState { settings };

    let router = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api-docs/openapi.json", get(handlers::docs::openapi_json))
        .nest("/events", handlers::events::router())
        .fallback(fallback)
        .with_state(state.clone())
        .layer(map_response_with_state(state, render_error_detail));

    // Per-request logging only in development; production relies on the
    // trace layer spans.
    let router = if debug {
        router.layer(axum::middleware::from_fn(log_requests))
    } else {
        router
    };

    // stamp_req is layered after log_requests so it runs first and the
    // logging middleware can read the request ID from extensions.
    router
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(TraceLayer::new_for_http())
}

/// JSON 404 for unmatched routes, in the standard error envelope.
async fn fallback(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Re-render [`AppError`] responses with the debug flag from settings.
///
/// `IntoResponse for AppError` stashes the error in the response extensions
/// and renders the non-verbose form; in development this layer swaps in the
/// verbose body so operators see the full detail.
async fn render_error_detail(State(settings): State<Settings>, res: Response) -> Response {
    match res.extensions().get::<AppError>() {
        Some(err) if settings.is_debug() => err.to_response(true),
        _ => res,
    }
}

fn log_routes() {
    info!("ROUTES:");
    info!("   • GET  /health");
    info!("   • GET  /api-docs/openapi.json");
    info!("   • /events (placeholder group, no endpoints yet)");
}

// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use lib_core::config::AppEnv;
    use lib_core::dto::ErrorResponse;
    use tower::ServiceExt;

    fn test_settings(app_env: AppEnv) -> Settings {
        Settings {
            app_env,
            host: "127.0.0.1".to_string(),
            port: 8000,
            database_url: "postgresql://u:p@h/db".to_string(),
            pagination_default_limit: 50,
            pagination_max_limit: 200,
        }
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Vec<u8>, Option<String>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let request_id = response
            .headers()
            .get("X-Request-ID")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        (status, body, request_id)
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = create_router(test_settings(AppEnv::Test));

        let (status, body, _) = send(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = create_router(test_settings(AppEnv::Test));

        let (status, body, _) = send(app, "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["info"]["title"], "events-service");
        assert!(json["openapi"].as_str().unwrap().starts_with('3'));
    }

    #[tokio::test]
    async fn unknown_route_gets_error_envelope() {
        let app = create_router(test_settings(AppEnv::Test));

        let (status, body, _) = send(app, "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error.code, "not_found");
        assert!(error.error.message.contains("/nope"));
    }

    #[tokio::test]
    async fn events_group_has_no_endpoints_yet() {
        let app = create_router(test_settings(AppEnv::Development));

        let (status, _, _) = send(app, "/events/123").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    /// Router with a route that fails internally, wired with the same
    /// error-rendering layer as [`create_router`].
    fn failing_app(app_env: AppEnv) -> Router {
        let state = AppState {
            settings: test_settings(app_env),
        };
        Router::new()
            .route(
                "/boom",
                get(|| async { AppError::Internal("flux capacitor offline".to_string()) }),
            )
            .with_state(state.clone())
            .layer(map_response_with_state(state, render_error_detail))
    }

    #[tokio::test]
    async fn internal_error_detail_is_shown_in_development() {
        let app = failing_app(AppEnv::Development);

        let (status, body, _) = send(app, "/boom").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error.code, "internal_server_error");
        assert!(error.error.message.contains("flux capacitor offline"));
    }

    #[tokio::test]
    async fn internal_error_detail_is_hidden_in_production() {
        let app = failing_app(AppEnv::Production);

        let (status, body, _) = send(app, "/boom").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error.code, "internal_server_error");
        assert_eq!(error.error.message, "An internal error occurred");
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let app = create_router(test_settings(AppEnv::Production));

        let (_, _, request_id) = send(app, "/health").await;

        assert!(request_id.is_some());
    }
}
