//! Table and JSON output formatting for CLI commands.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::{Table, Tabled};

use docvault_entity::document::{Annotation, DocumentVersion};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One version as a table row.
#[derive(Debug, Serialize, Tabled)]
pub struct VersionRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub logical_name: String,
    #[tabled(rename = "Version")]
    pub version_number: i64,
    #[tabled(rename = "Stored As")]
    pub storage_name: String,
    #[tabled(rename = "Size")]
    pub size_bytes: i64,
    #[tabled(rename = "Uploader")]
    pub uploaded_by: i64,
    #[tabled(rename = "Uploaded")]
    pub created_at: DateTime<Utc>,
}

impl From<&DocumentVersion> for VersionRow {
    fn from(v: &DocumentVersion) -> Self {
        Self {
            id: v.id.get(),
            logical_name: v.logical_name.clone(),
            version_number: v.version_number,
            storage_name: v.storage_name.clone(),
            size_bytes: v.size_bytes,
            uploaded_by: v.uploaded_by.get(),
            created_at: v.created_at,
        }
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single version
pub fn print_version(version: &DocumentVersion, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            print_kv("ID", &version.id.to_string());
            print_kv("Name", &version.logical_name);
            print_kv("Version", &version.version_number.to_string());
            print_kv("Stored as", &version.storage_name);
            print_kv("Path", &version.storage_path);
            print_kv("Size (bytes)", &version.size_bytes.to_string());
            print_kv("Uploader", &version.uploaded_by.to_string());
            print_kv("Uploaded", &version.created_at.to_rfc3339());
        }
        OutputFormat::Json => print_json(version),
    }
}

/// Print a single annotation
pub fn print_annotation(annotation: &Annotation, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            print_kv("Version", &annotation.version_id.to_string());
            print_kv("Analyzed", &annotation.created_at.to_rfc3339());
            println!("\n{}", annotation.text);
        }
        OutputFormat::Json => print_json(annotation),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{key}:"), value);
}
