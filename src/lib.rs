//! HTTP API for PDF text extraction and summarization.
//!
//! `POST /extract-text` decodes a base64 PDF data-URI, strips repeated
//! headers/footers and low-information lines from every page, and returns
//! the joined text. `POST /summarize-text` forwards text to a remote
//! summarization service. The heuristics live in [`utils::page_clean`];
//! PDF decoding and summarization are external collaborators.

pub mod api;
pub mod handlers;
pub mod utils;

pub use api::server::{build_router, start_server, AppState};
pub use utils::summarizer::SummarizerService;
