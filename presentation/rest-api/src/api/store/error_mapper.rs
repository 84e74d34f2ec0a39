use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::store::errors::StoreError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for StoreError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            StoreError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "store.not_found"),
            StoreError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
