//! HTTP request handlers, one module per endpoint.

pub mod extract_text;
pub mod summarize_text;

pub use extract_text::extract_text;
pub use summarize_text::summarize_text;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::api::types::ErrorResponse;

/// Builds the standardized error reply `{"error": "<message>"}`.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Validates that the request body is a JSON object carrying exactly one
/// string field named `name`. Shape violations (non-object body, wrong
/// field type) answer 415; a missing, null, or surplus field answers 400.
/// The missing-field check runs before the surplus-field check.
pub(crate) fn require_string_field(body: &Value, name: &str) -> Result<String, Response> {
    let Some(object) = body.as_object() else {
        return Err(error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "request body must be a JSON object",
        ));
    };

    let value = object.get(name);
    if value.is_none() || matches!(value, Some(Value::Null)) {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("missing field '{name}'"),
        ));
    }
    if object.len() > 1 {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "unexpected additional JSON fields",
        ));
    }

    match value.and_then(Value::as_str) {
        Some(text) => Ok(text.to_string()),
        None => Err(error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("{name} must be a string"),
        )),
    }
}
