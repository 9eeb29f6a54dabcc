//! Configuration display command.

use docvault_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Show the effective configuration
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match format {
        OutputFormat::Json => output::print_json(&config),
        OutputFormat::Table => {
            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv(
                "Server",
                &format!("{}:{}", config.server.host, config.server.port),
            );
            output::print_kv("Database", &config.database.url);
            output::print_kv("Storage root", &config.storage.root_path);
            output::print_kv(
                "Max upload",
                &format!("{} bytes", config.storage.max_upload_size_bytes),
            );
            output::print_kv(
                "Version retries",
                &config.storage.max_version_retries.to_string(),
            );
            output::print_kv(
                "Default actor",
                &config.uploads.default_actor_id.to_string(),
            );
            output::print_kv(
                "Logging",
                &format!("{} ({})", config.logging.level, config.logging.format),
            );
        }
    }

    Ok(())
}
