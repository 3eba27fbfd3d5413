//! Conversion entry points.
//!
//! ## Why spawn_blocking?
//!
//! The whole extract → normalize → classify → build phase is compute-bound:
//! it parses content streams, runs regexes, and deflates the output package.
//! `tokio::task::spawn_blocking` moves it onto the blocking thread pool so
//! one large PDF cannot starve the async I/O workers serving other requests.
//! Inside a single conversion the stages run strictly in order; no stage
//! starts before the previous has produced its full output.

use crate::error::ConvertError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{docx, extract};
use std::time::Instant;
use tracing::{debug, info};

/// Convert PDF bytes into a DOCX document.
///
/// This is the primary entry point for the library. The `file_name` is used
/// for the document title and for log context; it is never touched as a
/// filesystem path.
///
/// # Errors
/// Returns `Err(ConvertError)` only for fatal errors: unparseable PDF or a
/// failure assembling the output package. Per-page extraction failures are
/// logged, skipped, and counted in [`ConversionStats::skipped_pages`]. A
/// document with zero retained pages still converts successfully into a
/// near-empty, valid DOCX.
pub async fn convert(
    bytes: Vec<u8>,
    file_name: impl Into<String>,
) -> Result<ConversionOutput, ConvertError> {
    let file_name = file_name.into();
    tokio::task::spawn_blocking(move || convert_blocking(&bytes, &file_name))
        .await
        .map_err(|e| ConvertError::Internal(format!("conversion task panicked: {e}")))?
}

/// Synchronous conversion, for callers without a Tokio runtime.
///
/// Runs the identical pipeline on the calling thread.
pub fn convert_blocking(bytes: &[u8], file_name: &str) -> Result<ConversionOutput, ConvertError> {
    let total_start = Instant::now();
    info!("starting conversion: {} ({} bytes)", file_name, bytes.len());

    let extract_start = Instant::now();
    let extracted = extract::extract_pages(bytes)?;
    let extract_duration_ms = extract_start.elapsed().as_millis() as u64;
    info!(
        "extracted {}/{} pages from {} in {}ms ({} skipped)",
        extracted.pages.len(),
        extracted.total_pages,
        file_name,
        extract_duration_ms,
        extracted.skipped_pages,
    );

    let build_start = Instant::now();
    let docx_bytes = docx::build_document(file_name, &extracted.pages)?;
    let build_duration_ms = build_start.elapsed().as_millis() as u64;
    debug!("built DOCX package: {} bytes", docx_bytes.len());

    let stats = ConversionStats {
        total_pages: extracted.total_pages,
        retained_pages: extracted.pages.len(),
        skipped_pages: extracted.skipped_pages,
        extract_duration_ms,
        build_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "conversion complete: {} ({} pages, {}ms total)",
        file_name, stats.retained_pages, stats.total_duration_ms
    );

    Ok(ConversionOutput {
        docx: docx_bytes,
        stats,
    })
}
