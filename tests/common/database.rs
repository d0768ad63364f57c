//! Database test fixtures and utilities
//!
//! Each fixture owns a fresh SQLite file in its own temporary directory, so
//! tests are isolated and several connections can hit the same database.

use axum::Router;
use sqlx::SqlitePool;
use tempfile::TempDir;
use vichar::backend::auth::password::MIN_COST;
use vichar::backend::auth::TokenCodec;
use vichar::backend::server::{create_app_with_pool, load_database, ServerConfig};

/// Secret shared by the fixture's server and its token helpers
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test database fixture
///
/// The temporary directory, and the database in it, is removed when the
/// fixture is dropped.
pub struct TestDatabase {
    _dir: TempDir,
    pool: SqlitePool,
    config: ServerConfig,
}

impl TestDatabase {
    /// Create a migrated database and a matching server config
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("vichar-test.db").display());

        let config = ServerConfig::builder()
            .database_url(url.clone())
            .jwt_secret(TEST_SECRET)
            .bcrypt_cost(MIN_COST)
            .build()
            .expect("Failed to build test config");

        let pool = load_database(&url)
            .await
            .expect("Failed to open test database");

        Self {
            _dir: dir,
            pool,
            config,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The full application router on this database
    pub fn app(&self) -> Router {
        create_app_with_pool(self.pool.clone(), &self.config).expect("Failed to build app")
    }

    /// A codec holding the server's secret, for forging test tokens
    pub fn tokens(&self) -> TokenCodec {
        TokenCodec::new(self.config.jwt_secret.as_bytes(), self.config.token_ttl())
    }
}
