//! Storage and upload configuration.

use serde::{Deserialize, Serialize};

/// Local document storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the versioned files. Created on startup.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Maximum upload size in bytes (default 100 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// How many times an upload re-resolves its version number after
    /// losing a race on the `(logical_name, version_number)` constraint.
    #[serde(default = "default_max_version_retries")]
    pub max_version_retries: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            max_upload_size_bytes: default_max_upload(),
            max_version_retries: default_max_version_retries(),
        }
    }
}

/// Upload attribution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Actor recorded as uploader when the request names none.
    #[serde(default = "default_actor_id")]
    pub default_actor_id: i64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            default_actor_id: default_actor_id(),
        }
    }
}

fn default_root_path() -> String {
    "./storage".to_string()
}

fn default_max_upload() -> u64 {
    104_857_600 // 100 MiB
}

fn default_max_version_retries() -> u32 {
    5
}

fn default_actor_id() -> i64 {
    1
}
