//! Error types for the pdf2docx library.
//!
//! Two distinct failure modes exist:
//!
//! * [`ConvertError`] — **Fatal**: the conversion cannot proceed at all
//!   (input is not a parseable PDF, OOXML packaging failed). Returned as
//!   `Err(ConvertError)` from the top-level `convert*` functions.
//!
//! * Per-page extraction failures are **non-fatal**: a single bad page is
//!   logged with a warning and skipped, and the count is recorded in
//!   [`crate::output::ConversionStats::skipped_pages`]. The rest of the
//!   document converts normally.
//!
//! The HTTP layer never exposes the internal detail carried by these
//! variants; it logs them and answers with a generic `CONVERSION_FAILED`
//! body instead.

use thiserror::Error;

/// All fatal errors returned by the pdf2docx library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input bytes are not a parseable PDF (bad header, trailer or xref).
    #[error("input is not a valid PDF: {detail}")]
    InvalidPdf { detail: String },

    /// Assembling or compressing the OOXML package failed.
    #[error("failed to build DOCX document: {detail}")]
    DocumentBuild { detail: String },

    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected internal error (worker task panicked, runtime failure).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<zip::result::ZipError> for ConvertError {
    fn from(e: zip::result::ZipError) -> Self {
        ConvertError::DocumentBuild {
            detail: e.to_string(),
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(e: std::io::Error) -> Self {
        ConvertError::DocumentBuild {
            detail: e.to_string(),
        }
    }
}
