//! Credential store interface
//!
//! What the account service needs from persistence. Uniqueness of emails is
//! the store's job: `create_user` is a single atomic insert-if-absent, and a
//! conflicting concurrent insert comes back as [`StoreError::DuplicateEmail`].

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Failures a credential store can report
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already holds this email
    #[error("email already registered")]
    DuplicateEmail,

    /// Unexpected database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Durable user records
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert a new user unless the email is taken
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;
}
