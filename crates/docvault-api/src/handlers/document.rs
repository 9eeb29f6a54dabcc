//! Document version handlers: upload, listing, and download.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use docvault_core::error::AppError;

use crate::dto::response::{ApiResponse, VersionResponse};
use crate::error::ApiError;
use crate::extractors::{Actor, parse_version_id};
use crate::state::AppState;

/// POST /api/files/upload: multipart upload with a `file` field
pub async fn upload(
    State(state): State<AppState>,
    actor: Actor,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<VersionResponse>>), ApiError> {
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(String::from)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::validation("The file field must carry a filename"))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
        file = Some((file_name, data));
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::validation("Multipart field 'file' is required"))?;

    let version = state.upload_service.upload(&actor, &file_name, data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(VersionResponse::from(version))),
    ))
}

/// GET /api/files
pub async fn list_versions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VersionResponse>>>, ApiError> {
    let versions = state.document_service.list_versions().await?;
    Ok(Json(ApiResponse::ok(
        versions.into_iter().map(VersionResponse::from).collect(),
    )))
}

/// GET /api/files/{id}
pub async fn get_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<VersionResponse>>, ApiError> {
    let version = state
        .document_service
        .get_version(parse_version_id(&id)?)
        .await?;
    Ok(Json(ApiResponse::ok(VersionResponse::from(version))))
}

/// GET /api/files/{id}/download
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let result = state
        .document_service
        .download(parse_version_id(&id)?)
        .await?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&result.version.logical_name),
            ),
        ],
        result.data,
    )
        .into_response())
}

/// GET /api/documents/{name}/versions
pub async fn list_versions_of(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<Vec<VersionResponse>>>, ApiError> {
    let versions = state.document_service.list_versions_of(&name).await?;
    Ok(Json(ApiResponse::ok(
        versions.into_iter().map(VersionResponse::from).collect(),
    )))
}

/// `attachment` disposition naming the logical file, when it fits in a header.
fn content_disposition(file_name: &str) -> HeaderValue {
    let escaped = file_name.replace(['"', '\\'], "_");
    HeaderValue::from_str(&format!("attachment; filename=\"{escaped}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
