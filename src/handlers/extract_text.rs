use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{error, info};

use crate::api::types::ExtractTextResponse;
use crate::handlers::{error_response, require_string_field};
use crate::utils::extract::extract_document_text;

/// `POST /extract-text`
///
/// Expects `{"content": "data:application/pdf;base64,..."}` and returns
/// `{"text": "..."}` with the cleaned document text. Malformed payloads
/// answer 422, everything else in the contract is rejected up front by
/// the field validation.
pub async fn extract_text(Json(body): Json<Value>) -> Response {
    let content = match require_string_field(&body, "content") {
        Ok(content) => content,
        Err(rejection) => return rejection,
    };

    if !content.starts_with("data:application/pdf;") {
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "content must be a 'data:application/pdf;' URI",
        );
    }

    // The scheme sits between the first ';' and the payload comma.
    let scheme = content.split(';').nth(1).unwrap_or("");
    if !scheme.starts_with("base64,") {
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "content must be base64-encoded",
        );
    }

    match extract_document_text(&content) {
        Ok(text) => {
            info!("Extracted {} characters of cleaned text from PDF", text.len());
            (StatusCode::OK, Json(ExtractTextResponse { text })).into_response()
        }
        Err(err) => {
            error!("PDF text extraction failed: {}", err);
            error_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
    }
}
