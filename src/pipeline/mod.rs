//! Pipeline stages for PDF-to-DOCX conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the PDF backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! bytes ──▶ extract ──▶ normalize ──▶ classify ──▶ docx
//!           (lopdf)     (pure)        (pure)       (zip)
//! ```
//!
//! 1. [`extract`]   — enumerate pages and pull reading-order text per page;
//!    runs in `spawn_blocking` because PDF parsing is CPU-bound
//! 2. [`normalize`] — deterministic whitespace and paragraph-break repair
//! 3. [`classify`]  — split processed text into blocks and tag each as
//!    heading or paragraph
//! 4. [`docx`]      — emit the styled WordprocessingML package

pub mod classify;
pub mod docx;
pub mod extract;
pub mod normalize;
