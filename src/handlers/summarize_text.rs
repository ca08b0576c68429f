use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{error, info};

use crate::api::server::AppState;
use crate::api::types::SummarizeTextResponse;
use crate::handlers::{error_response, require_string_field};
use crate::utils::summarizer::SummarizerError;

/// `POST /summarize-text`
///
/// Expects `{"text": "..."}` and returns `{"summary": "..."}` from the
/// remote summarization service. Empty text short-circuits to an empty
/// summary without calling the service.
pub async fn summarize_text(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let text = match require_string_field(&body, "text") {
        Ok(text) => text,
        Err(rejection) => return rejection,
    };

    if text.is_empty() {
        return (
            StatusCode::OK,
            Json(SummarizeTextResponse {
                summary: String::new(),
            }),
        )
            .into_response();
    }

    let Some(summarizer) = &state.summarizer else {
        error!("Summarize request received but no summarization service is configured");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Summarization service is not configured on the server.",
        );
    };

    match summarizer.summarize(&text).await {
        Ok(summary) => {
            info!("Summarized {} characters of text", text.len());
            (StatusCode::OK, Json(SummarizeTextResponse { summary })).into_response()
        }
        Err(err) => {
            error!("Summarization failed: {}", err);
            let status = match err {
                SummarizerError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::BAD_GATEWAY,
            };
            error_response(status, err.to_string())
        }
    }
}
