/**
 * Request Body Rejections
 *
 * `ApiJson` is the request-body extractor for every JSON route. It parses
 * exactly like `axum::Json`, but a body that is not JSON, does not match the
 * expected shape, or arrives without `Content-Type: application/json` is
 * turned into a `BackendError` and answered with `400 {"message": ...}`.
 *
 * The parser's own description of the problem can quote the body, so it is
 * only logged.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

/// Message sent for any body that cannot be read as the expected JSON
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// JSON request body whose rejection is a `BackendError`
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(
            status = rejection.status().as_u16(),
            detail = %rejection.body_text(),
            "Rejected request body"
        );
        Self::Validation(SharedError::validation("body", INVALID_BODY_MESSAGE))
    }
}
