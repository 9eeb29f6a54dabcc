//! Document version repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::types::VersionId;
use docvault_entity::document::{CreateVersion, DocumentVersion};

use super::is_unique_violation;

/// Repository for document version rows.
#[derive(Debug, Clone)]
pub struct VersionRepository {
    pool: SqlitePool,
}

impl VersionRepository {
    /// Create a new version repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a version by ID.
    pub async fn find_by_id(&self, id: VersionId) -> AppResult<Option<DocumentVersion>> {
        sqlx::query_as::<_, DocumentVersion>("SELECT * FROM document_versions WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find version", e))
    }

    /// Find the highest-numbered version stored under `logical_name`.
    pub async fn find_latest_by_name(
        &self,
        logical_name: &str,
    ) -> AppResult<Option<DocumentVersion>> {
        sqlx::query_as::<_, DocumentVersion>(
            "SELECT * FROM document_versions WHERE logical_name = ?1 \
             ORDER BY version_number DESC LIMIT 1",
        )
        .bind(logical_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find latest version", e)
        })
    }

    /// List every version, most recent upload first.
    pub async fn list_all(&self) -> AppResult<Vec<DocumentVersion>> {
        sqlx::query_as::<_, DocumentVersion>(
            "SELECT * FROM document_versions ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list versions", e))
    }

    /// List the versions of one logical document, newest version first.
    pub async fn list_by_name(&self, logical_name: &str) -> AppResult<Vec<DocumentVersion>> {
        sqlx::query_as::<_, DocumentVersion>(
            "SELECT * FROM document_versions WHERE logical_name = ?1 \
             ORDER BY version_number DESC",
        )
        .bind(logical_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list document versions", e)
        })
    }

    /// Insert a version row.
    ///
    /// Fails with [`ErrorKind::Conflict`] when `(logical_name,
    /// version_number)` is already taken.
    pub async fn create(&self, data: &CreateVersion) -> AppResult<DocumentVersion> {
        sqlx::query_as::<_, DocumentVersion>(
            "INSERT INTO document_versions \
             (logical_name, version_number, storage_name, storage_path, size_bytes, uploaded_by, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING *",
        )
        .bind(&data.logical_name)
        .bind(data.version_number)
        .bind(&data.storage_name)
        .bind(&data.storage_path)
        .bind(data.size_bytes)
        .bind(data.uploaded_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(format!(
                    "Version {} of '{}' already exists",
                    data.version_number, data.logical_name
                ))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create version", e)
            }
        })
    }

    /// Delete a version row. Returns `true` if a row was removed.
    pub async fn delete(&self, id: VersionId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM document_versions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete version", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count stored versions.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM document_versions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count versions", e))
    }
}
