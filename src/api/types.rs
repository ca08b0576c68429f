//! Wire types for the JSON API.

use serde::{Deserialize, Serialize};

/// Successful reply from `POST /extract-text`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractTextResponse {
    /// Cleaned document text, pages joined with newlines.
    pub text: String,
}

/// Successful reply from `POST /summarize-text`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeTextResponse {
    pub summary: String,
}

/// Body shared by every non-2xx reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Reply from `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::{ErrorResponse, ExtractTextResponse, SummarizeTextResponse};

    #[test]
    fn extract_response_serializes_with_text_field() {
        let response = ExtractTextResponse {
            text: "cleaned text".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"text": "cleaned text"}));
    }

    #[test]
    fn summarize_response_serializes_with_summary_field() {
        let response = SummarizeTextResponse {
            summary: String::new(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"summary": ""}));
    }

    #[test]
    fn error_response_round_trips() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"error": "missing field 'content'"}"#).unwrap();
        assert_eq!(parsed.error, "missing field 'content'");
    }
}
