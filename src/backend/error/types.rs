/**
 * Backend Error Types
 *
 * This module defines the error type returned by every handler, service and
 * middleware in the backend.
 *
 * # Error Categories
 *
 * ## Client Errors (4xx)
 *
 * - Credential policy violations and duplicate signups (400)
 * - Failed logins, merged so unknown emails and wrong passwords look alike (400)
 * - Missing, malformed, forged or expired bearer tokens (401)
 * - Missing resources and resources owned by someone else, merged (404)
 *
 * ## Server Errors (5xx)
 *
 * Storage, hashing and token signing failures. These are logged with full
 * detail and reach the client only as a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::store::StoreError;
use crate::shared::SharedError;

/// Message sent for every 5xx response
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Message sent for every 401 response
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Backend-specific error types
///
/// Each variant maps to an HTTP status code through [`BackendError::status_code`]
/// and to a client-facing message through [`BackendError::message`]. The
/// `Display` text is for logs only.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Input rejected by the credential policy or request validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Signup for an email that already has an account
    #[error("email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Protected route called without a bearer token
    #[error("missing bearer token")]
    MissingToken,

    /// Bearer token failed verification (or could not be issued)
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// Mutation attempted by someone other than the owner
    #[error("{resource} is owned by another user")]
    Forbidden {
        /// Kind of resource, used in the client message
        resource: &'static str,
    },

    /// Resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Kind of resource, used in the client message
        resource: &'static str,
    },

    /// Unexpected persistence failure
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// bcrypt failed to produce a hash
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Anything else that is the server's fault
    #[error("internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create a not-found error for the given resource kind
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `DuplicateEmail`, `InvalidCredentials` - 400 Bad Request
    /// - `MissingToken`, `Token` - 401 Unauthorized (signing failures are 500)
    /// - `Forbidden`, `NotFound` - 404 Not Found
    /// - `Storage`, `Hashing`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateEmail | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::Token(err) if err.is_client_error() => StatusCode::UNAUTHORIZED,
            Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Forbidden { .. } | Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Hashing(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the failure is the server's fault
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the client-facing message
    ///
    /// Never contains internal detail. `Forbidden` renders exactly like
    /// `NotFound` so a non-owner cannot confirm that a resource exists.
    pub fn message(&self) -> String {
        if self.is_server_error() {
            return SERVER_ERROR_MESSAGE.to_string();
        }

        match self {
            Self::Validation(err) => err.user_message().to_string(),
            Self::DuplicateEmail => "User already exists".to_string(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::MissingToken | Self::Token(_) => UNAUTHORIZED_MESSAGE.to_string(),
            Self::Forbidden { resource } | Self::NotFound { resource } => {
                format!("{} not found", resource)
            }
            Self::Storage(_) | Self::Hashing(_) | Self::Internal(_) => {
                SERVER_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::DuplicateEmail,
            StoreError::Database(err) => Self::Storage(err),
        }
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("blocking task failed: {}", err))
    }
}
