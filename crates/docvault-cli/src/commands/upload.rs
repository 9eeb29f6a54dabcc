//! File upload CLI command.

use std::path::PathBuf;

use bytes::Bytes;
use clap::Args;

use docvault_core::error::AppError;
use docvault_core::types::ActorId;
use docvault_service::RequestContext;

use crate::output::{self, OutputFormat};

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Path to the file to upload
    pub file: PathBuf,

    /// Logical document name (defaults to the file's name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Uploader ID (defaults to `uploads.default_actor_id`)
    #[arg(long)]
    pub actor: Option<i64>,
}

/// Execute the upload command
pub async fn execute(
    args: &UploadArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let logical_name = match &args.name {
        Some(name) => name.clone(),
        None => args
            .file
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .ok_or_else(|| {
                AppError::validation(format!("Cannot derive a name from {}", args.file.display()))
            })?,
    };

    let content = tokio::fs::read(&args.file).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::not_found(format!("File not found: {}", args.file.display()))
        } else {
            AppError::from(e)
        }
    })?;

    let state = super::create_state(config_path).await?;
    let actor = ActorId(
        args.actor
            .unwrap_or(state.config.uploads.default_actor_id),
    );

    let version = state
        .upload_service
        .upload(&RequestContext::new(actor), &logical_name, Bytes::from(content))
        .await?;

    if format == OutputFormat::Table {
        output::print_success(&format!(
            "Stored '{}' as version {} ({})",
            version.logical_name, version.version_number, version.storage_name
        ));
    }
    output::print_version(&version, format);
    Ok(())
}
