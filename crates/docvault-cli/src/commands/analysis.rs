//! Analysis commands: generate and show version annotations.

use clap::Args;

use docvault_core::error::AppError;
use docvault_core::types::VersionId;

use crate::output::{self, OutputFormat};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Version ID to analyze
    pub id: i64,
}

/// Arguments for the analysis command
#[derive(Debug, Args)]
pub struct AnalysisArgs {
    /// Version ID whose analysis to show
    pub id: i64,
}

/// Generate and store the annotation of a version
pub async fn analyze(
    args: &AnalyzeArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::create_state(config_path).await?;
    let annotation = state.analysis_service.analyze(VersionId(args.id)).await?;
    output::print_annotation(&annotation, format);
    Ok(())
}

/// Show the stored annotation of a version
pub async fn show(
    args: &AnalysisArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::create_state(config_path).await?;
    let annotation = state
        .analysis_service
        .get_annotation(VersionId(args.id))
        .await?;
    output::print_annotation(&annotation, format);
    Ok(())
}
