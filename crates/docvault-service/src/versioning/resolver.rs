//! Resolves the next version number and on-disk name for an upload.

use docvault_entity::document::DocumentVersion;

/// The outcome of resolving an upload against the latest stored version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Next version number, starting at 1.
    pub version_number: i64,
    /// File name with `_v{version_number}` inserted before the extension.
    pub storage_name: String,
}

/// Resolve the version for a new upload of `logical_name`.
///
/// `latest` is the highest-numbered version already stored under the same
/// logical name, if any.
pub fn resolve(logical_name: &str, latest: Option<&DocumentVersion>) -> ResolvedVersion {
    let version_number = latest.map_or(1, |v| v.version_number + 1);
    ResolvedVersion {
        version_number,
        storage_name: storage_name(logical_name, version_number),
    }
}

/// Insert `_v{version_number}` before the extension of `logical_name`.
///
/// The extension starts at the last `.` of the final path component.
/// Leading dots belong to the stem, so `.bashrc` and `..bashrc` have none.
pub fn storage_name(logical_name: &str, version_number: i64) -> String {
    let file_start = logical_name.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let file_name = &logical_name[file_start..];
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();

    match file_name[stem_start..].rfind('.') {
        Some(dot) => {
            let split = file_start + stem_start + dot;
            format!(
                "{}_v{version_number}{}",
                &logical_name[..split],
                &logical_name[split..]
            )
        }
        _ => format!("{logical_name}_v{version_number}"),
    }
}
