/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * Bodies that are not the expected JSON are rejected by `ApiJson` with
 * `400 Invalid request body`.
 *
 * # Registration Process
 *
 * 1. Validate email format and domain against the credential policy
 * 2. Validate password length
 * 3. Hash password using bcrypt
 * 4. Create user; a taken email is reported by the database constraint
 * 5. Generate token
 * 6. Return token and user info with 201 Created
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::account::AccountService;
use crate::backend::error::{ApiJson, BackendError};
use crate::shared::{AuthResponse, SignupRequest};

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid email, disallowed domain, short password, or email taken
/// * `500 Internal Server Error` - hashing, storage or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@gmail.com", "password": "secret1" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": { "id": "123e4567-e89b-12d3-a456-426614174000", "email": "a@gmail.com" }
/// }
/// ```
pub async fn signup(
    State(accounts): State<AccountService>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Signup request for email: {}", request.email);

    let response = accounts.signup(&request.email, &request.password).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
