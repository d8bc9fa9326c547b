//! PDF text extraction — turns an uploaded document into cleaned plain text.
//!
//! Parsing is delegated to the `pdf-extract` crate (pages in natural order,
//! joined with newlines). There is no OCR fallback: image-only pages
//! contribute nothing, so a scanned document can legitimately come back empty.

use std::path::Path;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document could not be opened or parsed as a PDF.
    #[error("failed to open or parse PDF document: {0}")]
    Unreadable(String),

    /// The document parsed, but no machine-readable text survived cleaning.
    #[error("document contains no extractable text")]
    NoText,
}

/// Extracts and cleans text from the PDF at `path`.
///
/// `Unreadable` and `NoText` are distinct failures: callers that want to
/// tell a corrupt upload apart from an image-only scan can match on them.
pub fn extract_text_from_pdf(path: &Path) -> Result<String, ExtractError> {
    let raw = pdf_extract::extract_text(path).map_err(|e| {
        warn!("pdf-extract failed on {}: {e}", path.display());
        ExtractError::Unreadable(e.to_string())
    })?;

    let cleaned = clean_extracted_text(&raw);
    if cleaned.is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(cleaned)
}

/// Trims every line, drops blank ones, and rejoins the survivors with
/// newlines, preserving their original order.
fn clean_extracted_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
