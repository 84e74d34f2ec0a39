use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::IdMismatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.id_mismatch",
            ),
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_price",
            ),
            ProductError::InvalidSortField => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_sort_field",
            ),
            ProductError::InvalidSortOrder => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_sort_order",
            ),
            ProductError::InvalidPage => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_page",
            ),
            ProductError::EmptyImport => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.empty_import",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
