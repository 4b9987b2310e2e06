//! Database migration runner
//!
//! Migrations are plain SQL files in the `migrations/` directory at the
//! workspace root, embedded into the binary at compile time via
//! `sqlx::migrate!` and applied at startup.
//!
//! # Example
//!
//! ```no_run
//! use userbase_shared::db::migrations::run_migrations;
//! use userbase_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default()).await?;
//! run_migrations(&pool).await?;
//! # Ok(())
//! # }
//! ```

use sqlx::mysql::MySqlPool;
use tracing::{info, warn};

/// Runs all pending database migrations
///
/// Migrations that have already been applied (tracked in the
/// `_sqlx_migrations` table) are skipped.
///
/// # Errors
///
/// Returns an error if a migration file fails to execute or the database
/// connection is lost mid-run.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("../migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
