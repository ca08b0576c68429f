use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("There was a timeout while accessing the summarization service. Try again in a couple minutes.")]
    Timeout,

    #[error("There was an error at the summarization service. Error: {0}")]
    UpstreamStatus(StatusCode),

    #[error("There was an error accessing the summarization service. Error: {0}")]
    Request(reqwest::Error),

    #[error("Malformed reply from the summarization service: {0}")]
    Reply(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SummarizerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SummarizerError::Timeout
        } else {
            SummarizerError::Request(err)
        }
    }
}

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummarizeReply {
    summary: String,
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

/// Client for the remote text-to-text summarization service.
///
/// The service is opaque: text goes in, a summary comes out. Requests
/// carry a bearer key and give up after 25 seconds by default; no
/// retries.
pub struct SummarizerService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SummarizerService {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    /// Same as [`new`](Self::new) with an explicit request timeout.
    pub fn with_timeout(base_url: String, api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        let endpoint = format!("{}/summarize-text", self.base_url);
        debug!("Sending text to the summarization service at {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&SummarizeRequest { text })
            .send()
            .await?
            .error_for_status();

        match response {
            Ok(response) => {
                let body = response.text().await?;
                debug!("Received reply from the summarization service");

                let reply = serde_json::from_str::<SummarizeReply>(&body)?;
                Ok(reply.summary)
            }
            Err(err) => {
                if let Some(status) = err.status() {
                    error!("Summarization service error: status {}", status);
                    return Err(SummarizerError::UpstreamStatus(status));
                }
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SummarizerError, SummarizerService};

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let service = SummarizerService::new("http://localhost:9000/".into(), "key".into());
        assert_eq!(service.base_url, "http://localhost:9000");
    }

    #[test]
    fn timeout_message_mentions_retrying_later() {
        let message = SummarizerError::Timeout.to_string();
        assert!(message.contains("timeout"));
        assert!(message.contains("Try again"));
    }
}
