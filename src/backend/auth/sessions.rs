/**
 * Session Tokens
 *
 * This module issues and verifies the signed bearer tokens that stand in
 * for a password on every protected request.
 *
 * Tokens are HS256 JWTs carrying `sub` (user id), `iat` and `exp`. Nothing is
 * stored server-side: a token is valid exactly when its signature checks out
 * against the server secret and the current time is before `exp`.
 */

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime when none is configured
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Why a token was rejected
///
/// The first three kinds are all "unauthorized" to a client; they stay
/// distinct for logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Not a well-formed token for this server
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Signature does not match the server secret
    #[error("token signature does not match")]
    BadSignature,

    /// Signature is fine but the token is past `exp`
    #[error("token has expired")]
    Expired,

    /// The server failed to sign a new token
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl TokenError {
    /// Whether this rejection is the caller's fault (401 rather than 500)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Signing(_))
    }
}

/// Issues and verifies bearer tokens with a server-held secret
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec signing with `secret`, issuing tokens valid for `ttl`
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` against an explicit clock.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// How long an issued token stays valid
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for a user, valid from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to create token: {}", e);
            TokenError::Signing(e.to_string())
        })
    }

    /// Verify a token and return the user it was issued to
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`
    ///
    /// The signature is checked before any claim is looked at.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(classify)?
            .claims;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Uuid::parse_str(&claims.sub)
            .map_err(|e| TokenError::Malformed(format!("subject is not a user id: {}", e)))
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed(err.to_string()),
    }
}
