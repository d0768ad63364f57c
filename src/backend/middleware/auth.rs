/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies bearer tokens from the
 * Authorization header and provides the verified user ID to handlers.
 *
 * The middleware only checks the token. It never reads or writes the
 * database; whether the user still exists is the handler's concern.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::BackendError;

/// Identity established by a verified bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Extract the bearer token from the Authorization header
///
/// The scheme is matched case-insensitively. A missing header, another
/// scheme, or an empty token all yield `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches the user ID to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing or invalid, without
/// calling the handler.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenCodec>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!(path = %request.uri().path(), "Missing bearer token");
        BackendError::MissingToken
    })?;

    let user_id = tokens.verify(token).map_err(|e| {
        tracing::warn!(path = %request.uri().path(), "Rejected token: {}", e);
        e
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Reads the identity the middleware attached. On a route without the
/// middleware it rejects with 401 rather than letting the handler run
/// anonymously.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::MissingToken
            })
    }
}
