//! Repository implementations for DocVault entities.

pub mod annotation;
pub mod version;

pub use annotation::AnnotationRepository;
pub use version::VersionRepository;

/// Whether a sqlx error is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
