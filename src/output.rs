//! Result types produced by the conversion pipeline.
//!
//! All entities here are plain immutable records that live for exactly one
//! conversion; nothing is persisted and nothing is shared between requests.

use serde::{Deserialize, Serialize};

/// Text extracted from a single PDF page.
///
/// Page numbers are 1-based, strictly increasing and contiguous across the
/// sequence produced by the extractor; dropped source pages leave no gaps.
/// A page whose extracted text is empty or whitespace-only is never
/// emitted, so `processed_text` is always non-empty on a retained page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// 1-based page number in the source document.
    pub page_number: usize,
    /// Text exactly as the extractor produced it.
    pub raw_text: String,
    /// Text after normalization (see [`crate::pipeline::normalize`]).
    pub processed_text: String,
}

/// Classification of a content block within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Heading,
    Paragraph,
}

/// A classified content block: trimmed, non-empty text plus its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentElement {
    pub text: String,
    pub kind: ElementKind,
}

impl ContentElement {
    pub fn is_heading(&self) -> bool {
        self.kind == ElementKind::Heading
    }
}

/// Aggregate statistics for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Page count of the source document.
    pub total_pages: usize,
    /// Pages that survived extraction and normalization.
    pub retained_pages: usize,
    /// Pages dropped because extraction failed or yielded no text.
    pub skipped_pages: usize,
    /// Wall-clock time spent extracting text.
    pub extract_duration_ms: u64,
    /// Wall-clock time spent assembling the OOXML package.
    pub build_duration_ms: u64,
    /// End-to-end conversion time.
    pub total_duration_ms: u64,
}

/// The complete result of a conversion: the DOCX bytes plus run statistics.
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// A complete, valid OOXML word-processing package.
    pub docx: Vec<u8>,
    /// Statistics for logging and the HTTP layer.
    pub stats: ConversionStats,
}
