//! Database migration command.

use docvault_core::error::AppError;

use crate::output;

/// Execute the migrate command
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    println!("Running database migrations...");
    docvault_database::migration::run_migrations(pool.pool()).await?;
    pool.close().await;

    output::print_success("All migrations applied successfully.");
    Ok(())
}
