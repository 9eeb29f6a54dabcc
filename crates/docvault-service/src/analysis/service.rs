//! Analysis service: generates and stores one annotation per version.

use std::sync::Arc;

use tracing::info;

use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::types::VersionId;
use docvault_database::repositories::{AnnotationRepository, VersionRepository};
use docvault_entity::document::{Annotation, CreateAnnotation};

use super::annotator::annotate;

/// Creates and looks up version annotations.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    /// Version repository.
    versions: Arc<VersionRepository>,
    /// Annotation repository.
    annotations: Arc<AnnotationRepository>,
}

impl AnalysisService {
    /// Creates a new analysis service.
    pub fn new(versions: Arc<VersionRepository>, annotations: Arc<AnnotationRepository>) -> Self {
        Self {
            versions,
            annotations,
        }
    }

    /// Annotate a version.
    ///
    /// Fails with `NotFound` for an unknown version and `Conflict` when the
    /// version already has an annotation.
    pub async fn analyze(&self, version_id: VersionId) -> AppResult<Annotation> {
        let version = self
            .versions
            .find_by_id(version_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Version {version_id} not found")))?;

        if self.annotations.find_by_version(version_id).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Analysis already exists for version {version_id}"
            )));
        }

        let text = annotate(
            &version.logical_name,
            version.size_bytes,
            version.version_number,
            &mut rand::thread_rng(),
        );

        let annotation = self
            .annotations
            .create(&CreateAnnotation { version_id, text })
            .await?;

        info!(
            version_id = %version_id,
            annotation_id = %annotation.id,
            name = %version.logical_name,
            version = version.version_number,
            "Version analyzed"
        );

        Ok(annotation)
    }

    /// Fetch the annotation of a version.
    pub async fn get_annotation(&self, version_id: VersionId) -> AppResult<Annotation> {
        self.annotations
            .find_by_version(version_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No analysis found for version {version_id}")))
    }
}
