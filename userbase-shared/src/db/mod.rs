//! Database layer for userbase
//!
//! This module provides connection pooling and migrations. Models live in
//! the `models` module at crate root level.
//!
//! # Example
//!
//! ```no_run
//! use userbase_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(DatabaseConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod migrations;
pub mod pool;
