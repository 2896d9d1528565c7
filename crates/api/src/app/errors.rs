use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::DomainError;

/// Map a domain error to its HTTP response.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::NotFound => product_not_found(),
    }
}

/// Legacy not-found contract: status stays 200 and clients switch on the
/// payload shape, not the status code.
pub fn product_not_found() -> axum::response::Response {
    (
        StatusCode::OK,
        axum::Json(json!({"error": "Product not found"})),
    )
        .into_response()
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
