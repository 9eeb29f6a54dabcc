//! Typed path parameter helpers.

use docvault_core::error::AppError;
use docvault_core::types::VersionId;

/// Parses a version ID from a path segment.
pub fn parse_version_id(s: &str) -> Result<VersionId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid version id: {s}")))
}
