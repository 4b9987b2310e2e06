//! Health check endpoint
//!
//! Verifies database connectivity by asking the server for the active
//! schema name.
//!
//! # Endpoint
//!
//! ```text
//! GET /health
//! ```
//!
//! # Response
//!
//! ```json
//! { "status": "ok", "db": "practice_db" }
//! ```
//!
//! or, when the database is unreachable:
//!
//! ```json
//! { "status": "error", "message": "..." }
//! ```

use crate::app::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Health check response
///
/// `db` is present on success, `message` on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status: "ok" or "error"
    pub status: String,

    /// Active database/schema name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,

    /// Error detail when status is "error"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check handler
///
/// Runs `SELECT DATABASE()` on a pooled connection. A failure here means
/// the database is unreachable or the pool is exhausted, and is reported
/// with a 500 status carrying the driver's message.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let result: Result<(Option<String>,), sqlx::Error> =
        sqlx::query_as("SELECT DATABASE()").fetch_one(&state.db).await;

    match result {
        Ok((db,)) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                db: Some(db.unwrap_or_default()),
                message: None,
            }),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthResponse {
                status: "error".to_string(),
                db: None,
                message: Some(err.to_string()),
            }),
        ),
    }
}
