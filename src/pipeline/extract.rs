//! Page-wise text extraction via lopdf.
//!
//! ## Why spawn_blocking?
//!
//! Parsing a PDF and decoding its content streams is CPU-bound.
//! `tokio::task::spawn_blocking` moves the work onto the dedicated blocking
//! thread pool so Tokio worker threads are never stalled while a large
//! document is being decoded.
//!
//! ## Failure model
//!
//! A document that cannot be parsed at all is fatal
//! ([`ConvertError::InvalidPdf`]). A single page that fails to extract is
//! not: it is logged with a warning and skipped, and the remaining pages
//! are returned. Pages whose extracted text is empty or whitespace-only are
//! dropped the same way. Page order is never changed.

use crate::error::ConvertError;
use crate::output::PageContent;
use crate::pipeline::normalize;
use lopdf::Document;
use tracing::{debug, warn};

/// Outcome of extracting a whole document.
#[derive(Debug)]
pub struct ExtractedPages {
    /// Retained pages, in document order, with processed text attached.
    pub pages: Vec<PageContent>,
    /// Page count of the source document (including dropped pages).
    pub total_pages: usize,
    /// Pages dropped because extraction failed or text was whitespace-only.
    pub skipped_pages: usize,
}

/// Parse the PDF and extract text from every page.
///
/// Runs on the caller's thread; see [`crate::convert::convert`] for the
/// async entry point that wraps the whole compute-bound phase in
/// `spawn_blocking`.
pub fn extract_pages(bytes: &[u8]) -> Result<ExtractedPages, ConvertError> {
    let doc = Document::load_mem(bytes).map_err(|e| ConvertError::InvalidPdf {
        detail: e.to_string(),
    })?;

    // get_pages returns a BTreeMap keyed by 1-based page number, so
    // iteration order is document order.
    let page_map = doc.get_pages();
    let total_pages = page_map.len();

    let mut pages = Vec::with_capacity(total_pages);
    let mut skipped = 0usize;

    for (&page_num, _object_id) in page_map.iter() {
        let raw = match doc.extract_text(&[page_num]) {
            Ok(text) => text,
            Err(e) => {
                warn!("failed to extract text from page {}: {}", page_num, e);
                skipped += 1;
                continue;
            }
        };

        if raw.trim().is_empty() {
            debug!("page {} has no extractable text, dropping", page_num);
            skipped += 1;
            continue;
        }

        let processed = normalize::normalize(&raw);
        if processed.is_empty() {
            debug!("page {} normalized to empty text, dropping", page_num);
            skipped += 1;
            continue;
        }

        debug!("extracted {} characters from page {}", raw.len(), page_num);
        // Retained pages are renumbered 1..=n so the sequence stays
        // contiguous even when source pages were dropped.
        pages.push(PageContent {
            page_number: pages.len() + 1,
            raw_text: raw,
            processed_text: processed,
        });
    }

    Ok(ExtractedPages {
        pages,
        total_pages,
        skipped_pages: skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_invalid_pdf() {
        let result = extract_pages(b"this is definitely not a pdf");
        assert!(matches!(result, Err(ConvertError::InvalidPdf { .. })));
    }

    #[test]
    fn truncated_header_is_invalid_pdf() {
        let result = extract_pages(b"%PDF-1.4\nnothing else");
        assert!(matches!(result, Err(ConvertError::InvalidPdf { .. })));
    }
}
