//! Annotation repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::types::VersionId;
use docvault_entity::document::{Annotation, CreateAnnotation};

use super::is_unique_violation;

/// Repository for annotation rows.
#[derive(Debug, Clone)]
pub struct AnnotationRepository {
    pool: SqlitePool,
}

impl AnnotationRepository {
    /// Create a new annotation repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find the annotation attached to a version.
    pub async fn find_by_version(&self, version_id: VersionId) -> AppResult<Option<Annotation>> {
        sqlx::query_as::<_, Annotation>("SELECT * FROM annotations WHERE version_id = ?1")
            .bind(version_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find annotation", e))
    }

    /// Insert an annotation.
    ///
    /// A second annotation for the same version fails with
    /// [`ErrorKind::Conflict`].
    pub async fn create(&self, data: &CreateAnnotation) -> AppResult<Annotation> {
        sqlx::query_as::<_, Annotation>(
            "INSERT INTO annotations (version_id, text, created_at) VALUES (?1, ?2, ?3) RETURNING *",
        )
        .bind(data.version_id)
        .bind(&data.text)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(format!(
                    "Analysis already exists for version {}",
                    data.version_id
                ))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create annotation", e)
            }
        })
    }
}
