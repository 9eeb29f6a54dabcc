//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use docvault_core::config::AppConfig;
use docvault_core::traits::StorageProvider;
use docvault_service::{AnalysisService, DocumentService, UploadService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Storage provider holding version files
    pub storage: Arc<dyn StorageProvider>,

    // ── Services ─────────────────────────────────────────────
    /// Upload service
    pub upload_service: Arc<UploadService>,
    /// Version listing and download service
    pub document_service: Arc<DocumentService>,
    /// Annotation service
    pub analysis_service: Arc<AnalysisService>,
}
