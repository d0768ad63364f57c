/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the database and run migrations
 * 2. Build the token codec, password hasher and account service
 * 3. Create and configure the router
 *
 * Any failure is returned to the caller; the binary reports it and exits.
 */

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database initialization failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("service initialization failed: {0}")]
    Services(#[from] BackendError),
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &ServerConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing Vichar backend server");

    let pool = load_database(&config.database_url).await?;
    create_app_with_pool(pool, config)
}

/// Build the application on an already-open, migrated pool
pub fn create_app_with_pool(pool: SqlitePool, config: &ServerConfig) -> Result<Router, InitError> {
    let app_state = AppState::new(pool, config)?;
    tracing::info!(
        bcrypt_cost = config.bcrypt_cost,
        token_ttl_hours = config.token_ttl_hours,
        "Services initialized"
    );

    Ok(create_router(app_state, &config.cors_origins))
}
