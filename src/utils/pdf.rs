// Minimal PDF utilities for the extraction pipeline.
// Always keep this module small and dependency-light.

use anyhow::{anyhow, Context};
use std::panic::{self, AssertUnwindSafe};

/// Extracts per-page text from a PDF stored fully in memory, one string
/// per page, in document order.
///
/// This is a thin wrapper over the `pdf-extract` crate API. The crate can
/// panic on some malformed inputs rather than returning an error, so the
/// call runs inside `catch_unwind` and a panic is reported as an ordinary
/// decode error instead of taking the process down.
pub fn extract_pages_from_pdf_mem(bytes: &[u8]) -> anyhow::Result<Vec<String>> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match outcome {
        Ok(result) => result.context("failed to extract text from PDF bytes using pdf-extract"),
        Err(_) => Err(anyhow!("pdf-extract panicked on malformed PDF bytes")),
    }
}
