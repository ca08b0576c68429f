//! Router assembly and server startup.

use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::types::HealthResponse;
use crate::handlers::{extract_text, summarize_text};
use crate::utils::summarizer::SummarizerService;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Remote summarization client; `None` while base URL or API key is
    /// missing, in which case `/summarize-text` answers with an error.
    pub summarizer: Option<Arc<SummarizerService>>,
}

impl AppState {
    pub fn new(summarizer: Option<SummarizerService>) -> Self {
        Self {
            summarizer: summarizer.map(Arc::new),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Liveness probe.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the API router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/extract-text", post(extract_text))
        .route("/summarize-text", post(summarize_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the listener and serve until shutdown.
pub async fn start_server(addr: &str, state: AppState) -> Result<(), std::io::Error> {
    info!("Starting HTTP server on {}", addr);

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::AppState;

    #[test]
    fn default_state_has_no_summarizer() {
        assert!(AppState::default().summarizer.is_none());
    }
}
