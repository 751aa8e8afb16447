//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use arbor_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiFailure;

/// Newtype carrying an [`AppError`] across the Axum response boundary.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts from
/// `AppError` via `From`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            // Persistence errors pass through with their raw message.
            ErrorKind::Validation | ErrorKind::Database | ErrorKind::Serialization => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::Configuration | ErrorKind::ExternalService | ErrorKind::Internal => {
                tracing::error!(error = %self.0.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiFailure::new(self.0.message);

        (status, Json(body)).into_response()
    }
}
