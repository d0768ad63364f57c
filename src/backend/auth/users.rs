/**
 * User Model and Database Operations
 *
 * This module handles user records in SQLite and provides the
 * `CredentialStore` implementation the account service runs on.
 *
 * The `users.email` column is `UNIQUE`; `create_user` relies on that
 * constraint instead of a lookup before the insert.
 */

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::store::{CredentialStore, StoreError};
use crate::shared::{ProfileResponse, UserResponse};

/// User struct representing a user in the database
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Normalized (lowercase) email, unique
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public projection: id and email only
    pub fn to_public(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            email: self.email.clone(),
        }
    }

    /// Profile projection, still without the hash
    pub fn to_profile(&self) -> ProfileResponse {
        ProfileResponse {
            id: self.id,
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Normalized user email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user, or `StoreError::DuplicateEmail` if the unique constraint fired
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<User, StoreError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, email, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            StoreError::DuplicateEmail
        }
        e => StoreError::Database(e),
    })
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Count users holding an email (0 or 1 while the constraint holds)
pub async fn count_users_with_email(pool: &SqlitePool, email: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await
}

/// `CredentialStore` backed by the SQLite pool
#[derive(Clone, Debug)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(get_user_by_email(&self.pool, email).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(get_user_by_id(&self.pool, id).await?)
    }

    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        create_user(&self.pool, email, password_hash).await
    }
}
