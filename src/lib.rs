//! # pdf2docx
//!
//! Convert uploaded PDF documents to structured Word (DOCX) documents.
//!
//! ## Why this crate?
//!
//! PDF is a rendering format, not an editing format. This crate extracts the
//! textual content of a PDF page by page, repairs the whitespace damage that
//! text extraction inflicts, heuristically tells headings apart from body
//! paragraphs, and emits a minimal, valid Office Open XML word-processing
//! document that preserves page boundaries and carries a cover block of
//! conversion metadata.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF bytes
//!  │
//!  ├─ 1. Extract    per-page reading-order text (lopdf, spawn_blocking)
//!  ├─ 2. Normalize  collapse whitespace, rejoin broken lines, restore
//!  │                paragraph breaks
//!  ├─ 3. Classify   split blocks, tag Heading vs Paragraph
//!  └─ 4. Build      styled WordprocessingML, zipped into a .docx package
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2docx::convert;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("document.pdf")?;
//!     let output = convert(bytes, "document.pdf").await?;
//!     std::fs::write("document_converted.docx", &output.docx)?;
//!     eprintln!("{} pages converted", output.stats.retained_pages);
//!     Ok(())
//! }
//! ```
//!
//! The [`http`] module exposes the same pipeline as an HTTP service:
//! `POST /api/conversion/convert` with a multipart PDF upload answers with
//! the DOCX bytes, plus health and info probes. The `pdf2docx-server`
//! binary (feature `cli`, on by default) is a thin shim over
//! [`http::start_server`].

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod http;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ServiceConfig, ServiceConfigBuilder, DEFAULT_MAX_UPLOAD_BYTES};
pub use convert::{convert, convert_blocking};
pub use error::ConvertError;
pub use output::{ContentElement, ConversionOutput, ConversionStats, ElementKind, PageContent};
