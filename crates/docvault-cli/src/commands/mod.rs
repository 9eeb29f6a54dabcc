//! CLI command definitions and dispatch.

pub mod analysis;
pub mod config;
pub mod list;
pub mod migrate;
pub mod upload;

use clap::{Parser, Subcommand};

use docvault_api::AppState;
use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_database::DatabasePool;

use crate::output::OutputFormat;

/// DocVault: versioned document storage with canned analysis
#[derive(Debug, Parser)]
#[command(name = "docvault", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Upload a file as the next version of its document
    Upload(upload::UploadArgs),
    /// List stored versions
    List(list::ListArgs),
    /// Generate the analysis of a version
    Analyze(analysis::AnalyzeArgs),
    /// Show the analysis of a version
    Analysis(analysis::AnalysisArgs),
    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate => migrate::execute(&self.config).await,
            Commands::Upload(args) => upload::execute(args, &self.config, self.format).await,
            Commands::List(args) => list::execute(args, &self.config, self.format).await,
            Commands::Analyze(args) => analysis::analyze(args, &self.config, self.format).await,
            Commands::Analysis(args) => analysis::show(args, &self.config, self.format).await,
            Commands::Config => config::execute(&self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file, its environment overlay, and env vars
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    let env = std::env::var("DOCVAULT_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(config_path, &env)
}

/// Helper: connect to the database described by the configuration
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: migrate the database and build the same state the server uses
pub async fn create_state(config_path: &str) -> Result<AppState, AppError> {
    let config = load_config(config_path)?;
    let pool = create_db_pool(&config).await?;
    docvault_database::migration::run_migrations(pool.pool()).await?;
    docvault_api::build_state(config, pool.into_pool()).await
}
