/**
 * Profile Handler
 *
 * GET /api/profile. Requires the auth middleware to have verified a bearer
 * token; the user id comes from the typed identity it attached.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::account::AccountService;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::ProfileResponse;

/// Get the profile of the authenticated user
///
/// # Errors
///
/// * `401 Unauthorized` - no verified identity on the request
/// * `404 Not Found` - the token names a user that no longer exists
pub async fn get_profile(
    State(accounts): State<AccountService>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileResponse>, BackendError> {
    let profile = accounts.profile(user.user_id).await?;
    Ok(Json(profile))
}
