//! # resume2json
//!
//! Parse résumé documents into structured, partially-validated JSON.
//!
//! ## Why this crate?
//!
//! Résumés are free-form human-authored documents forced into a fixed
//! schema after the fact. There is no ground truth for "where does the
//! Experience section end" — so instead of a grammar or a model, this crate
//! encodes domain knowledge as an ordered set of pattern-match rules with
//! explicit tie-break priority, and it **never hard-fails on recoverable
//! problems**: missing data becomes a warning on the result, not an error.
//!
//! ## Pipeline Overview
//!
//! ```text
//! bytes
//!  │
//!  ├─ 1. Detect     sniff the binary signature (cross-check the extension)
//!  ├─ 2. Extract    per-format text adapter (PDF, DOCX/DOC, ODT, RTF, TXT)
//!  ├─ 3. Normalize  whitespace, bullets, date tokens, page-number noise
//!  ├─ 4. Segment    partition into sections (experience, education, …)
//!  ├─ 5. Entities   one extractor per section → structured records
//!  └─ 6. Validate   cross-field sanity checks → warnings, never errors
//! ```
//!
//! Stages compose as a linear transform chain: each is a pure function over
//! the previous stage's output, and one invocation owns every intermediate
//! value. N concurrent parses need no locking.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume2json::{parse_file, ParserOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resume = parse_file("resume.pdf", &ParserOptions::default())?;
//!     println!("{}", serde_json::to_string_pretty(&resume)?);
//!     for warning in &resume.metadata.warnings {
//!         eprintln!("warning: {warning}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Failure model
//!
//! A fatal [`ResumeParseError`] (unsupported extension, unreadable binary,
//! scanned PDF) means no résumé is produced at all. Everything else — a
//! missing email, an end date before its start date, an empty skills
//! section — is a warning in [`resume::ResumeMetadata::warnings`] on an
//! otherwise usable result.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `resume2json` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! resume2json = { version = "0.4", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod error;
pub mod options;
pub mod parse;
pub mod pipeline;
pub mod resume;
pub mod validate;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use error::ResumeParseError;
pub use options::{ParserOptions, ParserOptionsBuilder, SectionKey};
pub use parse::{parse_bytes, parse_file};
pub use pipeline::segment::SectionMap;
pub use resume::{
    Certification, ContactInfo, CustomSection, Education, Experience, Language, ParsedResume,
    Project, ResumeMetadata,
};
