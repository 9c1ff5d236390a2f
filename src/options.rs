//! Configuration types for résumé parsing.
//!
//! All parsing behaviour is controlled through [`ParserOptions`], built via
//! its [`ParserOptionsBuilder`]. Keeping every knob in one struct makes it
//! trivial to share options across threads, serialise them for logging, and
//! diff two runs to understand why their outputs differ.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of résumé section buckets the segmenter produces.
///
/// Sections whose header matches none of these keys are preserved as custom
/// sections under their original title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
}

impl SectionKey {
    /// All keys, in the order sections appear in a typical résumé.
    pub const ALL: [SectionKey; 8] = [
        SectionKey::Contact,
        SectionKey::Summary,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Certifications,
        SectionKey::Languages,
    ];

    /// Lowercase canonical name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Contact => "contact",
            SectionKey::Summary => "summary",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Certifications => "certifications",
            SectionKey::Languages => "languages",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "contact" => Ok(SectionKey::Contact),
            "summary" => Ok(SectionKey::Summary),
            "experience" => Ok(SectionKey::Experience),
            "education" => Ok(SectionKey::Education),
            "skills" => Ok(SectionKey::Skills),
            "projects" => Ok(SectionKey::Projects),
            "certifications" => Ok(SectionKey::Certifications),
            "languages" => Ok(SectionKey::Languages),
            other => Err(format!(
                "unknown section '{other}' (expected one of: contact, summary, experience, \
                 education, skills, projects, certifications, languages)"
            )),
        }
    }
}

/// Options for a résumé parse.
///
/// Built via [`ParserOptions::builder()`] or [`ParserOptions::default()`].
///
/// # Example
/// ```rust
/// use resume2json::{ParserOptions, SectionKey};
///
/// let options = ParserOptions::builder()
///     .skip_section(SectionKey::Projects)
///     .min_pdf_text_chars(50)
///     .build();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Reserved: run OCR on image-only PDFs. Currently unimplemented — a
    /// scanned PDF always fails fast with
    /// [`crate::error::ResumeParseError::ScannedDocument`], and this flag is
    /// accepted but ignored so callers can set it today and pick up OCR
    /// support without an API change later.
    pub enable_ocr: bool,

    /// Section buckets to bypass entirely. A skipped section produces an
    /// empty entity list and no "section is empty" warning.
    pub skip_sections: Vec<SectionKey>,

    /// Minimum number of extracted characters below which a PDF is treated
    /// as a scanned (image-only) document. Default: 100.
    ///
    /// Text-based résumé PDFs produce hundreds of characters per page even
    /// for sparse layouts; anything under ~100 across the whole document
    /// means the content lives in images the text decoder cannot see.
    pub min_pdf_text_chars: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            enable_ocr: false,
            skip_sections: Vec::new(),
            min_pdf_text_chars: 100,
        }
    }
}

impl ParserOptions {
    /// Create a new builder for `ParserOptions`.
    pub fn builder() -> ParserOptionsBuilder {
        ParserOptionsBuilder {
            options: Self::default(),
        }
    }

    /// Whether extraction for `key` was disabled by the caller.
    pub fn skips(&self, key: SectionKey) -> bool {
        self.skip_sections.contains(&key)
    }
}

/// Builder for [`ParserOptions`].
#[derive(Debug)]
pub struct ParserOptionsBuilder {
    options: ParserOptions,
}

impl ParserOptionsBuilder {
    pub fn enable_ocr(mut self, v: bool) -> Self {
        self.options.enable_ocr = v;
        self
    }

    pub fn skip_section(mut self, key: SectionKey) -> Self {
        if !self.options.skip_sections.contains(&key) {
            self.options.skip_sections.push(key);
        }
        self
    }

    pub fn skip_sections(mut self, keys: impl IntoIterator<Item = SectionKey>) -> Self {
        for key in keys {
            self = self.skip_section(key);
        }
        self
    }

    pub fn min_pdf_text_chars(mut self, n: usize) -> Self {
        self.options.min_pdf_text_chars = n;
        self
    }

    /// Build the options.
    pub fn build(self) -> ParserOptions {
        self.options
    }
}
