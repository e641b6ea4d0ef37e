//! Consistent JSON error responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use menud_core::MenuError;

/// Map a domain error to its HTTP response.
///
/// `store_fault` is the status used for the `Store` kind: list/create
/// report store failures as 500, update/delete as 400 (the service's
/// long-standing observable behavior, kept deliberately).
pub fn menu_error_to_response(err: MenuError, store_fault: StatusCode) -> axum::response::Response {
    match err {
        MenuError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        MenuError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        MenuError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "Menu item not found")
        }
        MenuError::Store(msg) => json_error(store_fault, "store_failure", msg),
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
