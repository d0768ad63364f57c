/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Security
 *
 * - An unknown email and a wrong password produce the same 400 response
 * - Both paths spend one bcrypt verification
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::account::AccountService;
use crate::backend::error::{ApiJson, BackendError};
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, or `Invalid credentials`
/// * `500 Internal Server Error` - storage or token failure
pub async fn login(
    State(accounts): State<AccountService>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for email: {}", request.email);

    let response = accounts.login(&request.email, &request.password).await?;
    Ok(Json(response))
}
