//! Route definitions for the DocVault HTTP API.
//!
//! Domain routes are mounted under `/api`; the banner sits at `/`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.storage.max_upload_size_bytes)
        .unwrap_or(usize::MAX);

    let api_routes = Router::new()
        .merge(file_routes())
        .merge(document_routes())
        .merge(analysis_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::root::banner))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// Upload, listing, and download of versions
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::document::list_versions))
        .route("/files/upload", post(handlers::document::upload))
        .route("/files/{id}", get(handlers::document::get_version))
        .route("/files/{id}/download", get(handlers::document::download))
}

/// Per-document version history
fn document_routes() -> Router<AppState> {
    Router::new().route(
        "/documents/{name}/versions",
        get(handlers::document::list_versions_of),
    )
}

/// Annotation endpoints
fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/files/{id}/analyze", post(handlers::analysis::analyze))
        .route("/files/{id}/analysis", get(handlers::analysis::get_analysis))
}

/// Health checks
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
