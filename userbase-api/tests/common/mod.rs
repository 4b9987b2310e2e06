//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - Test database setup (pool, migrations, table reset)
//! - Router construction against the test database
//! - Request building and response decoding helpers

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use sqlx::mysql::MySqlPool;
use userbase_api::app::{build_router, AppState};
use userbase_api::config::Config;
use userbase_shared::db::migrations::run_migrations;
use userbase_shared::db::pool::create_pool;

/// Test context containing the pool and the router under test
pub struct TestContext {
    pub db: MySqlPool,
    pub app: axum::Router,
    pub db_name: String,
}

impl TestContext {
    /// Creates a new test context against a fresh, empty users table
    ///
    /// Connects to the schema named by `TEST_DB_NAME` (default
    /// `practice_db_test`), runs migrations, and clears the table. Tests
    /// sharing one schema must run with `--test-threads=1`.
    pub async fn new() -> anyhow::Result<Self> {
        let mut config = Config::from_env()?;
        config.database.database =
            std::env::var("TEST_DB_NAME").unwrap_or_else(|_| "practice_db_test".to_string());
        let db_name = config.database.database.clone();

        let db = create_pool(config.database.clone()).await?;
        run_migrations(&db).await?;

        sqlx::query("DELETE FROM users").execute(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app, db_name })
    }
}

/// Builds a request with a JSON body
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a request with a raw (possibly malformed) body
pub fn raw_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a request with no body
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Decodes a response body as JSON
pub async fn response_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
