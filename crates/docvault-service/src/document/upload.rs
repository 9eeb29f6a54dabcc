//! Upload service: reserves the next version of a document and stores it.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use docvault_core::config::StorageConfig;
use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::traits::StorageProvider;
use docvault_database::repositories::VersionRepository;
use docvault_entity::document::{CreateVersion, DocumentVersion};

use crate::context::RequestContext;
use crate::versioning::resolve;

/// Stores uploads as new versions of their logical document.
#[derive(Clone)]
pub struct UploadService {
    /// Version repository.
    versions: Arc<VersionRepository>,
    /// Storage provider holding the version files.
    storage: Arc<dyn StorageProvider>,
    /// Storage configuration.
    config: StorageConfig,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService")
            .field("storage", &self.storage.provider_type())
            .finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        versions: Arc<VersionRepository>,
        storage: Arc<dyn StorageProvider>,
        config: StorageConfig,
    ) -> Self {
        Self {
            versions,
            storage,
            config,
        }
    }

    /// Store `data` as the next version of `logical_name`.
    ///
    /// The version row is reserved first. If writing the file then fails,
    /// the row is removed and the storage error is returned.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        logical_name: &str,
        data: Bytes,
    ) -> AppResult<DocumentVersion> {
        validate_logical_name(logical_name)?;

        if data.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }

        let version = self.reserve(ctx, logical_name, data.len() as i64).await?;

        if let Err(e) = self.storage.write(&version.storage_name, data).await {
            warn!(
                version_id = %version.id,
                storage_name = %version.storage_name,
                error = %e,
                "Storage write failed, releasing reserved version"
            );
            if let Err(cleanup) = self.versions.delete(version.id).await {
                warn!(version_id = %version.id, error = %cleanup, "Failed to release version");
            }
            return Err(e);
        }

        info!(
            actor_id = %ctx.actor_id,
            version_id = %version.id,
            name = %version.logical_name,
            version = version.version_number,
            size = version.size_bytes,
            "Document version created"
        );

        Ok(version)
    }

    /// Insert the next version row, re-resolving after each lost race.
    async fn reserve(
        &self,
        ctx: &RequestContext,
        logical_name: &str,
        size_bytes: i64,
    ) -> AppResult<DocumentVersion> {
        let mut retries = 0;
        loop {
            let latest = self.versions.find_latest_by_name(logical_name).await?;
            let resolved = resolve(logical_name, latest.as_ref());

            let data = CreateVersion {
                logical_name: logical_name.to_string(),
                version_number: resolved.version_number,
                storage_path: self.storage.location(&resolved.storage_name),
                storage_name: resolved.storage_name,
                size_bytes,
                uploaded_by: ctx.actor_id,
            };

            match self.versions.create(&data).await {
                Ok(version) => return Ok(version),
                Err(e) if e.is(ErrorKind::Conflict) && retries < self.config.max_version_retries => {
                    retries += 1;
                    debug!(
                        name = logical_name,
                        version = data.version_number,
                        retries,
                        "Version taken by a concurrent upload, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Reject names that are empty or would escape the storage root.
fn validate_logical_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("File name must not be empty"));
    }
    if name.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(AppError::validation(format!(
            "File name must not contain '..' segments: {name}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use docvault_core::types::ActorId;

    use super::*;
    use crate::test_support::fixture;

    fn ctx() -> RequestContext {
        RequestContext::new(ActorId(7))
    }

    #[derive(Debug)]
    struct FailingStorage;

    #[async_trait]
    impl StorageProvider for FailingStorage {
        fn provider_type(&self) -> &str {
            "failing"
        }

        async fn health_check(&self) -> AppResult<bool> {
            Ok(false)
        }

        async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
            Err(AppError::not_found(path.to_string()))
        }

        async fn write(&self, _path: &str, _data: Bytes) -> AppResult<()> {
            Err(AppError::storage("disk full"))
        }

        fn location(&self, path: &str) -> String {
            format!("/nowhere/{path}")
        }
    }

    #[tokio::test]
    async fn test_sequential_uploads() {
        let fx = fixture().await;
        let service =
            UploadService::new(fx.versions.clone(), fx.storage.clone(), StorageConfig::default());

        let v1 = service
            .upload(&ctx(), "report.pdf", Bytes::from(vec![0u8; 1500]))
            .await
            .unwrap();
        assert_eq!(v1.version_number, 1);
        assert_eq!(v1.storage_name, "report_v1.pdf");
        assert_eq!(v1.size_bytes, 1500);
        assert_eq!(v1.uploaded_by, ActorId(7));

        let v2 = service
            .upload(&ctx(), "report.pdf", Bytes::from(vec![1u8; 2048]))
            .await
            .unwrap();
        assert_eq!(v2.version_number, 2);
        assert_eq!(v2.storage_name, "report_v2.pdf");

        let on_disk = std::fs::read(&v2.storage_path).unwrap();
        assert_eq!(on_disk.len(), 2048);
        assert!(fx.dir.path().join("storage").join("report_v1.pdf").exists());
    }

    #[tokio::test]
    async fn test_names_are_versioned_independently() {
        let fx = fixture().await;
        let service =
            UploadService::new(fx.versions.clone(), fx.storage.clone(), StorageConfig::default());

        service.upload(&ctx(), "a.txt", Bytes::from("a")).await.unwrap();
        service.upload(&ctx(), "a.txt", Bytes::from("a")).await.unwrap();
        let b = service.upload(&ctx(), "b.txt", Bytes::from("b")).await.unwrap();
        assert_eq!(b.version_number, 1);
    }

    #[tokio::test]
    async fn test_concurrent_uploads_get_distinct_versions() {
        let fx = fixture().await;
        let service =
            UploadService::new(fx.versions.clone(), fx.storage.clone(), StorageConfig::default());

        let mut handles = Vec::new();
        for i in 0..4u8 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .upload(&ctx(), "race.bin", Bytes::from(vec![i; 16]))
                    .await
            }));
        }

        let mut numbers = Vec::new();
        for handle in handles {
            numbers.push(handle.await.unwrap().unwrap().version_number);
        }
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    /// Make every insert lose to a row with the same name and version.
    async fn always_taken(pool: &sqlx::SqlitePool) {
        sqlx::query(
            "CREATE TRIGGER always_taken BEFORE INSERT ON document_versions \
             BEGIN \
                 INSERT INTO document_versions \
                 (logical_name, version_number, storage_name, storage_path, size_bytes, uploaded_by, created_at) \
                 VALUES (NEW.logical_name, NEW.version_number, NEW.storage_name, NEW.storage_path, \
                         NEW.size_bytes, NEW.uploaded_by, NEW.created_at); \
             END",
        )
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_exhausted_retries_surface_conflict() {
        let fx = fixture().await;
        always_taken(&fx.pool).await;

        for max_version_retries in [0, 2] {
            let config = StorageConfig {
                max_version_retries,
                ..StorageConfig::default()
            };
            let service = UploadService::new(fx.versions.clone(), fx.storage.clone(), config);

            let err = service
                .upload(&ctx(), "report.pdf", Bytes::from("data"))
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Conflict);
        }

        assert_eq!(fx.versions.count().await.unwrap(), 0);
        assert!(!fx.dir.path().join("storage").join("report_v1.pdf").exists());
    }

    #[tokio::test]
    async fn test_failed_write_releases_version() {
        let fx = fixture().await;
        let service = UploadService::new(
            fx.versions.clone(),
            Arc::new(FailingStorage),
            StorageConfig::default(),
        );

        let err = service
            .upload(&ctx(), "report.pdf", Bytes::from("data"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
        assert_eq!(fx.versions.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rejects_bad_input() {
        let fx = fixture().await;
        let config = StorageConfig {
            max_upload_size_bytes: 4,
            ..StorageConfig::default()
        };
        let service = UploadService::new(fx.versions.clone(), fx.storage.clone(), config);

        let err = service
            .upload(&ctx(), "big.bin", Bytes::from("too large"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = service.upload(&ctx(), "  ", Bytes::from("x")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = service
            .upload(&ctx(), "../escape.txt", Bytes::from("x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
