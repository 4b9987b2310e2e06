//! Database models for userbase
//!
//! This module contains all database models and their CRUD operations.
//!
//! # Example
//!
//! ```no_run
//! use userbase_shared::db::pool::{create_pool, DatabaseConfig};
//! use userbase_shared::models::user::{NewUser, User};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default()).await?;
//!
//! let new_user = NewUser {
//!     name: "John Doe".to_string(),
//!     email: "user@example.com".to_string(),
//!     date: chrono::NaiveDate::from_ymd_opt(2025, 9, 11).unwrap(),
//! };
//!
//! let user = User::create(&pool, new_user).await?;
//! # Ok(())
//! # }
//! ```

pub mod user;
