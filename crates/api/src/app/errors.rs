use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::{DomainError, FieldViolation};

/// Single conversion point from domain errors to HTTP responses.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => item_not_found(),
        DomainError::Validation(violations) => validation_failed(violations),
        DomainError::InvalidId(msg) => detail_error(StatusCode::BAD_REQUEST, msg),
    }
}

/// 404 with the exact body the wire contract fixes.
pub fn item_not_found() -> axum::response::Response {
    detail_error(StatusCode::NOT_FOUND, "Item not found")
}

/// 422 listing every violated field.
pub fn validation_failed(violations: Vec<FieldViolation>) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({ "detail": violations })),
    )
        .into_response()
}

fn detail_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({ "detail": message.into() })),
    )
        .into_response()
}
