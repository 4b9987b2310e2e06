//! Database connection pool management
//!
//! This module provides a MySQL connection pool built on sqlx. The pool is
//! created once at startup; every statement checks a connection out of the
//! pool and returns it on every exit path, success or error.
//!
//! # Example
//!
//! ```no_run
//! use userbase_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = DatabaseConfig {
//!     database: "practice_db".to_string(),
//!     ..Default::default()
//! };
//!
//! let pool = create_pool(config).await?;
//! # Ok(())
//! # }
//! ```

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the database connection pool
///
/// Connection parameters default to a local development MySQL instance
/// (`root` with no password against `practice_db`). Timeouts are specified
/// in seconds for ease of configuration from environment variables.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database server host
    pub host: String,

    /// Database server port
    pub port: u16,

    /// Username for authentication
    pub user: String,

    /// Password for authentication (empty string for none)
    pub password: String,

    /// Schema/database name to connect to
    pub database: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of idle connections to maintain
    pub min_connections: u32,

    /// Timeout for acquiring a connection from the pool (seconds)
    ///
    /// 30 seconds is sqlx's own default; it is surfaced here so the
    /// effective value is visible in configuration.
    pub acquire_timeout_seconds: u64,

    /// How long a connection can remain idle before being closed (seconds)
    pub idle_timeout_seconds: Option<u64>,

    /// Maximum lifetime of a connection before forced recycling (seconds)
    pub max_lifetime_seconds: Option<u64>,

    /// Whether to test connections before returning them from the pool
    pub test_before_acquire: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "practice_db".to_string(),
            max_connections: 10,
            min_connections: 2,
            acquire_timeout_seconds: 30,
            idle_timeout_seconds: Some(600),
            max_lifetime_seconds: Some(1800),
            test_before_acquire: true,
        }
    }
}

impl DatabaseConfig {
    /// Builds sqlx connect options from the individual connection parameters.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if !self.password.is_empty() {
            options = options.password(&self.password);
        }

        options
    }
}

/// Creates and initializes a MySQL connection pool
///
/// This function creates a pool with the specified configuration and pings
/// the database once to verify connectivity before returning.
///
/// # Errors
///
/// Returns an error if the database is unreachable, the credentials are
/// rejected, or the initial ping fails.
pub async fn create_pool(config: DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Creating database connection pool"
    );

    let mut pool_options = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .test_before_acquire(config.test_before_acquire);

    if let Some(idle_timeout) = config.idle_timeout_seconds {
        pool_options = pool_options.idle_timeout(Duration::from_secs(idle_timeout));
        debug!(idle_timeout_seconds = idle_timeout, "Set idle timeout");
    }

    if let Some(max_lifetime) = config.max_lifetime_seconds {
        pool_options = pool_options.max_lifetime(Duration::from_secs(max_lifetime));
        debug!(max_lifetime_seconds = max_lifetime, "Set max lifetime");
    }

    let pool = pool_options.connect_with(config.connect_options()).await?;

    ping(&pool).await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Pings the database over a pooled connection
///
/// Executes a trivial query to verify the database is reachable and
/// responding.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    debug!("Pinging database");

    let result: (i64,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if result.0 == 1 {
        debug!("Database ping succeeded");
        Ok(())
    } else {
        warn!("Database ping returned unexpected value: {}", result.0);
        Err(sqlx::Error::Protocol(
            "Ping returned unexpected value".into(),
        ))
    }
}

/// Gracefully closes the connection pool
///
/// Called during application shutdown so all connections are returned and
/// closed before the process exits.
pub async fn close_pool(pool: MySqlPool) {
    info!("Closing database connection pool");
    pool.close().await;
    info!("Database connection pool closed");
}
