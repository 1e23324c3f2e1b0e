//! API Key Service - Main Application Entry Point
//!
//! REST API server behind the API key dashboard. It issues, lists, renames,
//! and revokes API keys, and validates presented keys on behalf of protected
//! resources.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Run the startup connectivity diagnostic
//! 5. Build HTTP router and start serving

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use apikey_dashboard_server::{AppState, build_router, config, db, store::postgres::PgApiKeyStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Startup diagnostic: fail fast if the store is unreachable rather than
    // discovering it on the first request
    db::ping(&pool).await?;
    tracing::info!("Database connectivity verified");

    // Construct the store client explicitly and inject it into the handlers
    let store = PgApiKeyStore::new(pool, config.store_timeout());
    let state = AppState {
        store: Arc::new(store),
    };

    let app = build_router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
