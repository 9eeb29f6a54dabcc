//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docvault_core::types::{ActorId, AnnotationId, VersionId};
use docvault_entity::document::{Annotation, DocumentVersion};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A stored document version.
///
/// Serialized with `version` and `size` keys. The absolute storage path
/// stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    /// Version ID.
    pub id: VersionId,
    /// Original filename.
    pub logical_name: String,
    /// Version number within the logical name.
    #[serde(rename = "version")]
    pub version_number: i64,
    /// On-disk filename.
    pub storage_name: String,
    /// Size in bytes.
    #[serde(rename = "size")]
    pub size_bytes: i64,
    /// Uploader.
    pub uploaded_by: ActorId,
    /// Upload time.
    pub created_at: DateTime<Utc>,
}

impl From<DocumentVersion> for VersionResponse {
    fn from(v: DocumentVersion) -> Self {
        Self {
            id: v.id,
            logical_name: v.logical_name,
            version_number: v.version_number,
            storage_name: v.storage_name,
            size_bytes: v.size_bytes,
            uploaded_by: v.uploaded_by,
            created_at: v.created_at,
        }
    }
}

/// A version's annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationResponse {
    /// Annotation ID.
    pub id: AnnotationId,
    /// Annotated version.
    pub version_id: VersionId,
    /// Generated text.
    pub text: String,
    /// Generation time.
    pub created_at: DateTime<Utc>,
}

impl From<Annotation> for AnnotationResponse {
    fn from(a: Annotation) -> Self {
        Self {
            id: a.id,
            version_id: a.version_id,
            text: a.text,
            created_at: a.created_at,
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok".
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Dependency health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// "ok" when every dependency is healthy, otherwise "degraded".
    pub status: String,
    /// "connected" or "unavailable".
    pub database: String,
    /// "available" or "unavailable".
    pub storage: String,
    /// Number of stored versions, when the database answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<i64>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}
