//! Version listing command.

use clap::Args;

use docvault_core::error::AppError;

use crate::output::{self, OutputFormat, VersionRow};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list versions of this document, newest version first
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::create_state(config_path).await?;

    let versions = match &args.name {
        Some(name) => state.document_service.list_versions_of(name).await?,
        None => state.document_service.list_versions().await?,
    };

    let rows: Vec<VersionRow> = versions.iter().map(VersionRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
