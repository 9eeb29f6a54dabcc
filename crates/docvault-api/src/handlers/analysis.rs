//! Annotation handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::response::{AnnotationResponse, ApiResponse};
use crate::error::ApiError;
use crate::extractors::parse_version_id;
use crate::state::AppState;

/// POST /api/files/{id}/analyze
pub async fn analyze(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<AnnotationResponse>>), ApiError> {
    let version_id = parse_version_id(&id)?;
    let annotation = state.analysis_service.analyze(version_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AnnotationResponse::from(annotation))),
    ))
}

/// GET /api/files/{id}/analysis
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AnnotationResponse>>, ApiError> {
    let version_id = parse_version_id(&id)?;
    let annotation = state.analysis_service.get_annotation(version_id).await?;
    Ok(Json(ApiResponse::ok(AnnotationResponse::from(annotation))))
}
