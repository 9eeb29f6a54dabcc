//! Wires repositories, storage, and services into an [`AppState`].

use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::info;

use docvault_core::config::AppConfig;
use docvault_core::result::AppResult;
use docvault_core::traits::StorageProvider;
use docvault_database::repositories::{AnnotationRepository, VersionRepository};
use docvault_service::{AnalysisService, DocumentService, UploadService};
use docvault_storage::LocalStorageProvider;

use crate::state::AppState;

/// Build the shared application state.
///
/// Creates the storage root if it does not exist yet. The pool is expected
/// to be migrated already.
pub async fn build_state(config: AppConfig, db_pool: SqlitePool) -> AppResult<AppState> {
    // ── Storage ──────────────────────────────────────────────
    let storage: Arc<dyn StorageProvider> =
        Arc::new(LocalStorageProvider::new(&config.storage.root_path).await?);
    info!(
        provider = storage.provider_type(),
        root = %config.storage.root_path,
        "Storage ready"
    );

    // ── Repositories ─────────────────────────────────────────
    let version_repo = Arc::new(VersionRepository::new(db_pool.clone()));
    let annotation_repo = Arc::new(AnnotationRepository::new(db_pool.clone()));

    // ── Services ─────────────────────────────────────────────
    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&version_repo),
        Arc::clone(&storage),
        config.storage.clone(),
    ));
    let document_service = Arc::new(DocumentService::new(
        Arc::clone(&version_repo),
        Arc::clone(&storage),
    ));
    let analysis_service = Arc::new(AnalysisService::new(
        Arc::clone(&version_repo),
        Arc::clone(&annotation_repo),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        storage,
        upload_service,
        document_service,
        analysis_service,
    })
}
