//! Error types for the resume2json library.
//!
//! The pipeline distinguishes two failure modes:
//!
//! * [`ResumeParseError`] — **Fatal**: no résumé can be produced at all
//!   (unsupported extension, unreadable binary, a scanned/image-only PDF).
//!   Returned as `Err(ResumeParseError)` from the top-level `parse_*`
//!   functions.
//!
//! * **Warnings** — Non-fatal: missing or suspect data (no email found, an
//!   end date before its start date, an empty education section). These
//!   accumulate in [`crate::resume::ResumeMetadata::warnings`] so callers can
//!   surface them to the user — typically as a prompt to fill the gaps by
//!   hand — while still receiving a best-effort structured résumé.
//!
//! Only the format-detection and text-extraction stages can fail; every later
//! stage is total and can only add warnings.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the resume2json library.
///
/// "Missing data" conditions are never errors; they are warnings stored in
/// [`crate::resume::ResumeMetadata::warnings`].
#[derive(Debug, Error)]
pub enum ResumeParseError {
    // ── Dispatch errors ───────────────────────────────────────────────────
    /// The file extension is outside the supported set.
    #[error("Unsupported file format: '.{extension}'\nSupported: .pdf, .docx, .doc, .odt, .rtf, .txt")]
    UnsupportedFormat { extension: String },

    // ── Extraction errors ─────────────────────────────────────────────────
    /// PDF text extraction yielded near-empty content, indicating an
    /// image-only (scanned) document. OCR is deliberately not attempted.
    #[error(
        "PDF appears to be a scanned document ({chars} characters of text extracted).\n\
         Image-only PDFs are not supported; export the résumé as a text-based PDF instead."
    )]
    ScannedDocument { chars: usize },

    /// Adapter-level failure: corrupt archive, malformed PDF structure,
    /// password protection.
    #[error("Failed to extract text from {format} document: {detail}")]
    Extraction { format: String, detail: String },

    // ── I/O errors (parse_file only) ──────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Resume file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure while reading the input.
    #[error("Failed to read resume file: {0}")]
    Io(#[from] std::io::Error),
}
