//! API key dashboard backend.
//!
//! This crate implements the key lifecycle and validation service behind an
//! API key dashboard: issuing, listing, renaming, and revoking keys, plus a
//! validation endpoint that gates access to a protected resource.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Store seam**: the [`store::ApiKeyStore`] trait; handlers and services
//!   depend on the trait, the Postgres implementation is injected at startup
//! - **Format**: JSON requests/responses

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod keygen;
pub mod models;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::ApiKeyStore;

/// Shared application state handed to every handler.
///
/// The store is behind `Arc<dyn ApiKeyStore>` so the HTTP layer is wired the
/// same way against Postgres in production and an in-memory double in tests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ApiKeyStore>,
}

/// Build the HTTP router for the service.
///
/// # Routes
///
/// - `GET /health` - service and database status
/// - `GET /apikeys` - list all keys, newest first
/// - `POST /apikeys` - mint a new key
/// - `PATCH /apikeys` - rename a key
/// - `DELETE /apikeys?id=` - revoke a key
/// - `POST /validate-key` - check a presented secret
///
/// The dashboard UI is a separate client, so CORS is left permissive.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/apikeys", get(handlers::api_keys::list_keys))
        .route("/apikeys", post(handlers::api_keys::create_key))
        .route("/apikeys", patch(handlers::api_keys::update_key))
        .route("/apikeys", delete(handlers::api_keys::delete_key))
        .route("/validate-key", post(handlers::validate::validate_key))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
