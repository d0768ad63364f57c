/**
 * Account Service
 *
 * Signup and login orchestration: credential policy, password hashing,
 * the credential store and token issuance, in that order.
 *
 * # Signup
 *
 * 1. Normalize and validate the email against the domain policy
 * 2. Validate the password length
 * 3. Hash the password (on the blocking pool)
 * 4. Insert the user; the store reports a taken email atomically
 * 5. Issue a token
 *
 * # Login
 *
 * An unknown email and a wrong password fail with the same
 * `InvalidCredentials` error, and both spend one bcrypt verification, so a
 * caller cannot tell registered emails apart by message or by timing.
 */

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::store::CredentialStore;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::shared::{normalize_email, AuthResponse, CredentialPolicy, ProfileResponse, SharedError};

/// Signup/login orchestration over an injected credential store
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenCodec>,
    policy: CredentialPolicy,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenCodec>,
        policy: CredentialPolicy,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
            policy,
        }
    }

    /// Register a new account and return a token for it
    ///
    /// # Errors
    ///
    /// * `Validation` - email or password rejected by the policy
    /// * `DuplicateEmail` - the email already has an account
    /// * `Storage` / `Hashing` / `Token` - server-side failures
    pub async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, BackendError> {
        let email = normalize_email(email);
        self.policy.validate_email(&email)?;
        self.policy.validate_password(password)?;

        let password_hash = self.hash_password(password).await?;
        let user = self.store.create_user(&email, &password_hash).await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User created");
        self.session_for(&user)
    }

    /// Check credentials and return a fresh token
    ///
    /// # Errors
    ///
    /// * `Validation` - email or password missing
    /// * `InvalidCredentials` - unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, BackendError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SharedError::validation("credentials", "Email and password are required").into());
        }

        let email = normalize_email(email);
        let user = self.store.find_by_email(&email).await?;
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());

        let matches = self.verify_password(password, stored_hash).await?;

        match user {
            Some(user) if matches => {
                tracing::info!(user_id = %user.id, email = %user.email, "User logged in");
                self.session_for(&user)
            }
            Some(_) => {
                tracing::warn!(email = %email, "Login with wrong password");
                Err(BackendError::InvalidCredentials)
            }
            None => {
                tracing::warn!(email = %email, "Login for unknown email");
                Err(BackendError::InvalidCredentials)
            }
        }
    }

    /// Public profile of an existing user
    pub async fn profile(&self, user_id: Uuid) -> Result<ProfileResponse, BackendError> {
        self.store
            .find_by_id(user_id)
            .await?
            .map(|user| user.to_profile())
            .ok_or_else(|| BackendError::not_found("User"))
    }

    fn session_for(&self, user: &User) -> Result<AuthResponse, BackendError> {
        let token = self.tokens.issue(user.id)?;
        Ok(AuthResponse {
            token,
            user: user.to_public(),
        })
    }

    async fn hash_password(&self, password: &str) -> Result<String, BackendError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password)).await?
    }

    async fn verify_password(
        &self,
        password: &str,
        stored_hash: Option<String>,
    ) -> Result<bool, BackendError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let matches = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => hasher.verify(&password, &hash),
            None => {
                hasher.verify_dummy(&password);
                false
            }
        })
        .await?;
        Ok(matches)
    }
}

impl fmt::Debug for AccountService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountService")
            .field("hasher", &self.hasher)
            .field("tokens", &self.tokens)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
