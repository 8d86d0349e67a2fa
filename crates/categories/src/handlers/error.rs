use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use categories_core::category::ServiceError;
use categories_core::storage::{
    repository_error_to_status_code, service_error_to_status_code, RepositoryError,
};

/// Handler error carrying any failure, rendered as `{"detail": "<message>"}`.
///
/// Known domain errors pick their status code; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// An internal server error with the given message.
    pub fn internal(message: &str) -> Self {
        Self(anyhow::anyhow!(message.to_string()))
    }

    fn status_code(&self) -> StatusCode {
        let code = if let Some(service_error) = self.0.downcast_ref::<ServiceError>() {
            Some(service_error_to_status_code(service_error))
        } else {
            self.0
                .downcast_ref::<RepositoryError>()
                .map(repository_error_to_status_code)
        };

        code.and_then(|c| StatusCode::from_u16(c).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = %status_code, "Request failed");
        }

        (status_code, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
