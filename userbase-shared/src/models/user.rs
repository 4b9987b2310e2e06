//! User model and database operations
//!
//! This module provides the `User` model and CRUD operations for the
//! `users` table. Every operation runs a single parameter-bound statement
//! against a pooled connection (autocommit, one implicit transaction per
//! statement).
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id    BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
//!     name  VARCHAR(255) NOT NULL,
//!     email VARCHAR(255) NOT NULL UNIQUE,
//!     date  DATE NOT NULL
//! );
//! ```
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
//! let user = User::create(
//!     &pool,
//!     NewUser {
//!         name: "Paras".to_string(),
//!         email: "paras@example.com".to_string(),
//!         date: chrono::NaiveDate::from_ymd_opt(2025, 9, 11).unwrap(),
//!     },
//! )
//! .await?;
//! println!("Created user {}", user.id);
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlPool;

/// User record as persisted in the `users` table
///
/// `date` is decoded from the MySQL `DATE` column into a `NaiveDate`, which
/// serde serializes as an ISO-8601 `YYYY-MM-DD` string. That derive is the
/// single conversion point for every response that carries a user record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Surrogate key, assigned by the database on insert
    pub id: i64,

    /// Display name, non-empty
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Calendar date (no time component)
    pub date: NaiveDate,
}

/// Validated input for creating a user or fully replacing one
///
/// All three fields are mandatory; PUT has full-replace semantics, so the
/// same struct serves both the insert and the update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl User {
    /// Creates a new user in the database
    ///
    /// Inserts the row, reads the generated id, and re-fetches the full row
    /// by that id so the returned record reflects exactly what storage
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The email already exists (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &MySqlPool, data: NewUser) -> Result<Self, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (name, email, date) VALUES (?, ?, ?)")
            .bind(&data.name)
            .bind(&data.email)
            .bind(data.date)
            .execute(pool)
            .await?;

        let id = result.last_insert_id() as i64;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, date FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, `None` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &MySqlPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, date FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users ordered by ascending id
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, date FROM users ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Fully replaces the mutable fields of an existing user
    ///
    /// Overwrites `name`, `email`, and `date` in place, then re-fetches and
    /// returns the row. The update and the re-fetch are separate autocommit
    /// statements; callers that need "not found" to take precedence over a
    /// constraint violation must check existence before calling this.
    ///
    /// # Returns
    ///
    /// The updated user, or `None` if no row with that id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The new email already exists on another row
    /// - Database connection fails
    pub async fn update(
        pool: &MySqlPool,
        id: i64,
        data: NewUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query("UPDATE users SET name = ?, email = ?, date = ? WHERE id = ?")
            .bind(&data.name)
            .bind(&data.email)
            .bind(data.date)
            .bind(id)
            .execute(pool)
            .await?;

        // rows_affected is 0 both for a missing row and for an update that
        // changed nothing, so existence comes from the re-fetch.
        Self::find_by_id(pool, id).await
    }

    /// Deletes a user by ID
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if no row matched
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &MySqlPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts total number of users
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn count(pool: &MySqlPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_struct() {
        let new_user = NewUser {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 11).unwrap(),
        };

        assert_eq!(new_user.name, "Test User");
        assert_eq!(new_user.email, "test@example.com");
    }

    #[test]
    fn test_user_serializes_date_as_iso_string() {
        let user = User {
            id: 1,
            name: "Paras".to_string(),
            email: "paras@example.com".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 11).unwrap(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Paras");
        assert_eq!(value["email"], "paras@example.com");
        assert_eq!(value["date"], "2025-09-11");
    }

    #[test]
    fn test_user_date_round_trips_through_json() {
        let user = User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            date: NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, user.date);
    }

    // Integration tests for database operations are in the api crate's
    // tests/ directory, driven through the HTTP surface.
}
