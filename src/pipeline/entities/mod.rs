//! Entity extraction: one extractor per section bucket.
//!
//! Every extractor is a pure function `(blob: &str) -> Vec<Entity>` and is
//! total: absence of a field yields an empty string, absence of any matches
//! yields an empty list, and nothing here can fail the pipeline. Heuristics
//! are encoded as ordered regex rules with explicit tie-break priority;
//! when patterns overlap, the order in which rules are tried is part of the
//! contract, not an implementation detail.

pub mod certifications;
pub mod contact;
pub mod dates;
pub mod education;
pub mod experience;
pub mod languages;
pub mod projects;
pub mod skills;

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BLANK_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Split a section blob into entry blocks at blank-line boundaries.
///
/// Entries without a blank line between them are not separated — résumés
/// with dense, unseparated consecutive entries under-segment here, and that
/// limitation is deliberate.
pub(crate) fn split_blocks(blob: &str) -> Vec<&str> {
    RE_BLANK_BOUNDARY
        .split(blob)
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect()
}

/// Trim a field and strip trailing `.`/`,` left behind by sentence-style
/// source lines.
pub(crate) fn clean_field(s: &str) -> String {
    s.trim().trim_end_matches(['.', ',']).trim().to_string()
}
