/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and middleware can
 * return it directly. The status code and message come from the error;
 * the body is always `{"message": "..."}`.
 *
 * Client errors are logged at `warn`, server errors at `error` with the full
 * internal detail that is withheld from the response.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;
use crate::shared::MessageResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(MessageResponse::new(self.message()))).into_response()
    }
}
