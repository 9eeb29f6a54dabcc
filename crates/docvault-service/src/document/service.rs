//! Read-side document operations: listing, lookup, and download.

use std::sync::Arc;

use bytes::Bytes;

use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::traits::StorageProvider;
use docvault_core::types::VersionId;
use docvault_database::repositories::VersionRepository;
use docvault_entity::document::DocumentVersion;

/// A version together with its stored content.
#[derive(Debug)]
pub struct DownloadResult {
    /// Version metadata.
    pub version: DocumentVersion,
    /// File content.
    pub data: Bytes,
}

/// Queries stored versions.
#[derive(Clone)]
pub struct DocumentService {
    versions: Arc<VersionRepository>,
    storage: Arc<dyn StorageProvider>,
}

impl std::fmt::Debug for DocumentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentService").finish()
    }
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(versions: Arc<VersionRepository>, storage: Arc<dyn StorageProvider>) -> Self {
        Self { versions, storage }
    }

    /// Every stored version, most recent upload first.
    pub async fn list_versions(&self) -> AppResult<Vec<DocumentVersion>> {
        self.versions.list_all().await
    }

    /// A single version by ID.
    pub async fn get_version(&self, id: VersionId) -> AppResult<DocumentVersion> {
        self.versions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Version {id} not found")))
    }

    /// The versions of one logical document, newest version first.
    pub async fn list_versions_of(&self, logical_name: &str) -> AppResult<Vec<DocumentVersion>> {
        self.versions.list_by_name(logical_name).await
    }

    /// Number of stored versions.
    pub async fn count_versions(&self) -> AppResult<i64> {
        self.versions.count().await
    }

    /// A version and its file content.
    pub async fn download(&self, id: VersionId) -> AppResult<DownloadResult> {
        let version = self.get_version(id).await?;
        let data = self.storage.read_bytes(&version.storage_name).await?;
        Ok(DownloadResult { version, data })
    }
}
