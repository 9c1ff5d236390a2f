//! Output data model: the structured résumé produced by a parse.
//!
//! Every type here is plain serialisable data — no handles, no cycles — so a
//! [`ParsedResume`] can be handed directly to a persistence layer or used to
//! pre-fill an editor. The record is owned by the caller once returned and is
//! never touched again by the pipeline.
//!
//! Fields the heuristics could not find are empty strings rather than
//! `Option`s: the surrounding product treats "unknown" and "empty" the same
//! way (an editor field the user has to fill in), and empty strings keep the
//! JSON shape stable for the front end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel end date for a position the candidate still holds.
///
/// When [`Experience::current`] is `true` the `end_date` field holds this
/// value and must not be interpreted as a calendar date.
pub const PRESENT: &str = "Present";

/// Contact details scraped from the top of the résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

/// A single job entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    /// `MM/YYYY`, `Month YYYY`, or bare `YYYY` as written in the source.
    pub start_date: String,
    /// Same formats as `start_date`, or [`PRESENT`] when `current` is set.
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

/// A degree or programme entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

/// A personal or professional project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub url: String,
}

/// A certification or license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
}

/// A spoken language, optionally with a proficiency level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

/// A section whose header matched no known bucket, preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSection {
    pub title: String,
    pub content: String,
}

/// Parse provenance and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeMetadata {
    /// The file name supplied at the upload boundary.
    pub file_name: String,
    /// Lowercase extension the dispatch used (`pdf`, `docx`, …).
    pub file_type: String,
    pub parsed_at: DateTime<Utc>,
    /// Non-fatal diagnostics accumulated across all stages, in stage order.
    /// Purely informational; never blocks the result.
    pub warnings: Vec<String>,
}

/// The pipeline's sole output type: every entity list plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub contact: ContactInfo,
    /// Raw text of the summary/objective section, trimmed.
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    /// Skill tokens, deduplicated case-sensitively in source order.
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    /// Sections with unrecognised headers, in source order.
    pub custom_sections: Vec<CustomSection>,
    pub metadata: ResumeMetadata,
}
