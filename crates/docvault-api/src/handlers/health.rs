//! Health check handlers.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use docvault_database::connection::health_check;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedHealthResponse>> {
    let database_ok = health_check(&state.db_pool).await.unwrap_or_else(|e| {
        warn!(error = %e, "Database health check failed");
        false
    });
    let storage_ok = state.storage.health_check().await.unwrap_or_else(|e| {
        warn!(error = %e, "Storage health check failed");
        false
    });

    let versions = if database_ok {
        state.document_service.count_versions().await.ok()
    } else {
        None
    };

    Json(ApiResponse::ok(DetailedHealthResponse {
        status: if database_ok && storage_ok { "ok" } else { "degraded" }.to_string(),
        database: if database_ok { "connected" } else { "unavailable" }.to_string(),
        storage: if storage_ok { "available" } else { "unavailable" }.to_string(),
        versions,
    }))
}
