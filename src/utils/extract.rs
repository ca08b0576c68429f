// Turns an uploaded data-URI into cleaned document text: base64 decode,
// per-page PDF extraction, then the page-cleanup pass.

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;
use tracing::debug;

use crate::utils::page_clean::clean_pages;
use crate::utils::pdf::extract_pages_from_pdf_mem;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input has no comma separating data-URI metadata from payload.
    #[error("Input corrupted, missing ','")]
    MissingSeparator,

    /// The payload after the comma, whitespace aside, is not valid
    /// standard-alphabet base64.
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The PDF decoder rejected the byte stream (empty or corrupt).
    #[error("Invalid or empty PDF")]
    Decode(#[source] anyhow::Error),
}

/// Decodes a `data:application/pdf;base64,...` string into per-page text,
/// cleans every page, and joins the cleaned pages with newlines.
///
/// An empty input short-circuits to an empty output without touching the
/// decoder. Otherwise the payload is the second comma-separated segment
/// of the input; ASCII whitespace in it is skipped and the rest must be
/// standard-alphabet base64. Decoder failures propagate unchanged;
/// nothing is retried.
pub fn extract_document_text(content: &str) -> Result<String, ExtractError> {
    if content.is_empty() {
        return Ok(String::new());
    }

    let payload = content
        .split(',')
        .nth(1)
        .ok_or(ExtractError::MissingSeparator)?;

    // Payloads from some encoders arrive line-wrapped; whitespace is not data.
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = general_purpose::STANDARD.decode(compact.as_bytes())?;

    let pages = extract_pages_from_pdf_mem(&bytes).map_err(ExtractError::Decode)?;
    debug!("Extracted text from {} PDF pages", pages.len());

    Ok(clean_pages(&pages).join("\n"))
}
