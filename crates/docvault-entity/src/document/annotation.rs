//! Annotation entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docvault_core::types::{AnnotationId, VersionId};

/// Generated descriptive text attached to exactly one version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Annotation {
    /// Unique annotation identifier.
    pub id: AnnotationId,
    /// The annotated version.
    pub version_id: VersionId,
    /// The generated text.
    pub text: String,
    /// When the annotation was generated.
    pub created_at: DateTime<Utc>,
}

/// Data required to create an annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnnotation {
    /// The annotated version.
    pub version_id: VersionId,
    /// The generated text.
    pub text: String,
}
