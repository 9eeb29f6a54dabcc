//! Document version entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docvault_core::types::{ActorId, VersionId};

/// One immutable upload of a logical document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DocumentVersion {
    /// Unique version identifier.
    pub id: VersionId,
    /// The original filename; the versioning key.
    pub logical_name: String,
    /// Sequential version number within `logical_name`, starting at 1.
    pub version_number: i64,
    /// On-disk filename with the `_v{n}` suffix.
    pub storage_name: String,
    /// Absolute location of the stored file.
    pub storage_path: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Actor credited with the upload.
    pub uploaded_by: ActorId,
    /// When this version was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new version record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVersion {
    /// The original filename.
    pub logical_name: String,
    /// Resolved version number.
    pub version_number: i64,
    /// Resolved storage name.
    pub storage_name: String,
    /// Absolute location of the stored file.
    pub storage_path: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Actor credited with the upload.
    pub uploaded_by: ActorId,
}
