use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orderdesk_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound(entity) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{entity} not found"))
        }
        err @ DomainError::InsufficientStock { .. } => {
            json_error(StatusCode::BAD_REQUEST, "insufficient_stock", err.to_string())
        }
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "conflict", msg),
        DomainError::Storage(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
