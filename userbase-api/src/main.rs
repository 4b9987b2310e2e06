//! # Userbase API Server
//!
//! HTTP CRUD service over a single `users` table. Each endpoint executes
//! parameter-bound SQL against a pooled MySQL connection and serializes the
//! result to JSON.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p userbase-api
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userbase_api::app::{build_router, AppState};
use userbase_api::config::Config;
use userbase_shared::db::migrations::run_migrations;
use userbase_shared::db::pool::{close_pool, create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userbase_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Userbase API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pool = create_pool(config.database.clone()).await?;
    run_migrations(&pool).await?;

    let state = AppState::new(pool.clone(), config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;

    Ok(())
}

/// Resolves when a shutdown signal (ctrl-c) is received
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
