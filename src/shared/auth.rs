//! Authentication wire types
//!
//! Request and response bodies for the signup, login and profile endpoints.
//! Responses only ever carry the public projection of a user: no password
//! hash leaves the server.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sign up request
#[derive(Deserialize, Serialize, Clone)]
pub struct SignupRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Clone)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (verified against the stored hash)
    #[serde(default)]
    pub password: String,
}

// Passwords stay out of logs even when a request is debug-printed.
impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Auth response
///
/// Returned by signup and login. Contains the bearer token and the
/// public user projection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed bearer token
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// Public projection of a user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
}

/// Profile of the authenticated user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Plain `{ "message": ... }` body, used for errors and acknowledgements
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
