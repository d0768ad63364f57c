/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once at startup and cloned into every request:
 * - the SQLite pool, used directly by the post handlers
 * - the `AccountService`, which owns the credential store, hasher and policy
 * - the `TokenCodec`, shared by the account service and the auth middleware
 *
 * Nothing in it is mutable, so it needs no locks.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State<AccountService>` or `State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::account::AccountService;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users::SqliteCredentialStore;
use crate::backend::error::BackendError;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Signup/login service
    pub accounts: AccountService,

    /// Token issuer/verifier, also handed to the auth middleware
    pub tokens: Arc<TokenCodec>,
}

impl AppState {
    /// Wire services on top of an open pool
    ///
    /// # Errors
    ///
    /// `BackendError::Hashing` if the configured bcrypt cost is rejected.
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Result<Self, BackendError> {
        let tokens = Arc::new(TokenCodec::new(config.jwt_secret.as_bytes(), config.token_ttl()));
        let hasher = Arc::new(PasswordHasher::new(config.bcrypt_cost)?);
        let store = Arc::new(SqliteCredentialStore::new(db_pool.clone()));

        let accounts = AccountService::new(
            store,
            hasher,
            Arc::clone(&tokens),
            config.credential_policy(),
        );

        Ok(Self {
            db_pool,
            accounts,
            tokens,
        })
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for AccountService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

impl FromRef<AppState> for Arc<TokenCodec> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.tokens)
    }
}
