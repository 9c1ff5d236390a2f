//! Section segmentation: partition normalised résumé text into named
//! buckets.
//!
//! A single-pass line scanner with two phases:
//!
//! 1. **Contact-block detection** — the lines above the first section
//!    header usually hold name/email/phone. We scan the first
//!    [`CONTACT_SCAN_WINDOW`] lines (skipping line 0, assumed to be the
//!    person's name) for a known header or an ALL-CAPS heading; the span
//!    before that boundary is the candidate contact block. It only counts
//!    as contact if it actually contains an email or phone — otherwise the
//!    lines fall through to the main scan.
//! 2. **Main scan** — every line either matches a known section header
//!    (switching the current bucket), matches the ALL-CAPS heuristic
//!    (opening a custom section under its own title), or accumulates into
//!    the current bucket. Blank lines become paragraph markers so block
//!    splitting downstream still sees entry boundaries.
//!
//! Known header patterns are checked before the ALL-CAPS heuristic, so a
//! recognised header name always wins over being treated as an unnamed
//! custom section. `awards`, `volunteer`, and `publications` are recognised
//! as headers but routed into custom sections — the schema has no
//! first-class slot for them.

use crate::options::SectionKey;
use crate::pipeline::entities::contact::{EMAIL_RE, PHONE_RE};
use crate::resume::CustomSection;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How many leading lines may hold the contact block.
const CONTACT_SCAN_WINDOW: usize = 15;
/// Contact-block size when no boundary is found inside the window.
const CONTACT_FALLBACK_LINES: usize = 4;

/// The segmented résumé: one raw text blob per fixed bucket, plus custom
/// sections in source order. Every bucket is always present (possibly
/// empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    pub contact: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub projects: String,
    pub certifications: String,
    pub languages: String,
    pub custom: Vec<CustomSection>,
}

impl SectionMap {
    /// The blob for a fixed bucket.
    pub fn bucket(&self, key: SectionKey) -> &str {
        match key {
            SectionKey::Contact => &self.contact,
            SectionKey::Summary => &self.summary,
            SectionKey::Experience => &self.experience,
            SectionKey::Education => &self.education,
            SectionKey::Skills => &self.skills,
            SectionKey::Projects => &self.projects,
            SectionKey::Certifications => &self.certifications,
            SectionKey::Languages => &self.languages,
        }
    }

    fn bucket_mut(&mut self, key: SectionKey) -> &mut String {
        match key {
            SectionKey::Contact => &mut self.contact,
            SectionKey::Summary => &mut self.summary,
            SectionKey::Experience => &mut self.experience,
            SectionKey::Education => &mut self.education,
            SectionKey::Skills => &mut self.skills,
            SectionKey::Projects => &mut self.projects,
            SectionKey::Certifications => &mut self.certifications,
            SectionKey::Languages => &mut self.languages,
        }
    }
}

// ── Header patterns ──────────────────────────────────────────────────────
//
// Full-line matches with an optional trailing colon. Order within the list
// does not matter (one bucket per pattern); order relative to the ALL-CAPS
// heuristic does.

static HEADER_PATTERNS: Lazy<Vec<(SectionKey, Regex)>> = Lazy::new(|| {
    let patterns: [(SectionKey, &str); 8] = [
        (
            SectionKey::Experience,
            r"(?i)^(work\s+experience|professional\s+experience|employment(\s+history)?|work\s+history|career\s+history|experience)\s*:?\s*$",
        ),
        (
            SectionKey::Education,
            r"(?i)^(education(al\s+background)?|academic\s+background|academics|qualifications)\s*:?\s*$",
        ),
        (
            SectionKey::Skills,
            r"(?i)^(technical\s+skills|core\s+competencies|areas\s+of\s+expertise|skills(\s*&\s*(abilities|expertise))?|technologies|tech\s+stack)\s*:?\s*$",
        ),
        (
            SectionKey::Summary,
            r"(?i)^(professional\s+summary|career\s+summary|summary(\s+of\s+qualifications)?|profile|career\s+objective|objective|about(\s+me)?)\s*:?\s*$",
        ),
        (
            SectionKey::Projects,
            r"(?i)^((personal|side|selected|key|academic)\s+projects|projects|portfolio)\s*:?\s*$",
        ),
        (
            SectionKey::Certifications,
            r"(?i)^(certifications?|certificates?|licenses?(\s*&\s*certifications?)?|professional\s+development|courses)\s*:?\s*$",
        ),
        (SectionKey::Languages, r"(?i)^(languages?(\s+spoken)?)\s*:?\s*$"),
        (
            SectionKey::Contact,
            r"(?i)^(contact(\s+(information|details|info))?|personal\s+(information|details))\s*:?\s*$",
        ),
    ];
    patterns
        .into_iter()
        .map(|(key, p)| (key, Regex::new(p).unwrap()))
        .collect()
});

/// Recognised headers that have no dedicated bucket; their sections are
/// preserved as custom sections under the original title.
static CUSTOM_ROUTED_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(awards(\s*&\s*honors)?|honors(\s*&\s*awards)?|volunteer(ing)?(\s+(experience|work))?|publications?)\s*:?\s*$",
    )
    .unwrap()
});

static RE_ALL_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z\s&]+$").unwrap());

enum HeaderHit {
    Known(SectionKey),
    CustomRouted,
}

fn match_header(line: &str) -> Option<HeaderHit> {
    for (key, pattern) in HEADER_PATTERNS.iter() {
        if pattern.is_match(line) {
            return Some(HeaderHit::Known(*key));
        }
    }
    if CUSTOM_ROUTED_HEADER.is_match(line) {
        return Some(HeaderHit::CustomRouted);
    }
    None
}

/// ALL-CAPS boundary heuristic for the contact scan: 10–50 chars, at least
/// two words, capitals/spaces/ampersands only.
fn is_contact_boundary_heading(line: &str) -> bool {
    let len = line.chars().count();
    (10..=50).contains(&len)
        && line.split_whitespace().count() >= 2
        && line.chars().any(|c| c.is_ascii_uppercase())
        && RE_ALL_CAPS.is_match(line)
}

/// ALL-CAPS custom-section heuristic for the main scan: under 50 chars,
/// capitals/spaces/ampersands only.
fn is_custom_heading(line: &str) -> bool {
    line.chars().count() < 50
        && line.chars().any(|c| c.is_ascii_uppercase())
        && RE_ALL_CAPS.is_match(line)
}

// ── Segmentation ─────────────────────────────────────────────────────────

/// Cursor state of the main scan.
enum Cursor {
    /// No header seen yet; buffered lines are dropped on flush.
    None,
    Known(SectionKey),
    Custom(String),
}

/// Partition normalised text into a [`SectionMap`].
pub fn segment(text: &str) -> SectionMap {
    let lines: Vec<&str> = text.lines().collect();
    let mut map = SectionMap::default();

    // Phase 1: contact block. Scan for a boundary, skipping line 0 (name).
    let scan_end = lines.len().min(CONTACT_SCAN_WINDOW);
    let boundary = (1..scan_end).find(|&i| {
        let line = lines[i].trim();
        match_header(line).is_some() || is_contact_boundary_heading(line)
    });
    let contact_end = boundary.unwrap_or_else(|| lines.len().min(CONTACT_FALLBACK_LINES));

    let candidate = lines[..contact_end].join("\n");
    let main_start = if EMAIL_RE.is_match(&candidate) || PHONE_RE.is_match(&candidate) {
        map.contact = candidate.trim().to_string();
        contact_end
    } else {
        0
    };

    // Phase 2: main scan.
    let mut cursor = Cursor::None;
    let mut buffer: Vec<&str> = Vec::new();

    for &raw in &lines[main_start..] {
        let line = raw.trim();

        if line.is_empty() {
            // Paragraph marker: keeps entry boundaries visible to the
            // block-splitting entity extractors.
            buffer.push("");
            continue;
        }

        match match_header(line) {
            Some(HeaderHit::Known(key)) => {
                flush(&mut map, &cursor, &mut buffer);
                cursor = Cursor::Known(key);
            }
            Some(HeaderHit::CustomRouted) => {
                flush(&mut map, &cursor, &mut buffer);
                cursor = Cursor::Custom(line.to_string());
            }
            None if is_custom_heading(line) => {
                flush(&mut map, &cursor, &mut buffer);
                cursor = Cursor::Custom(line.to_string());
            }
            None => buffer.push(raw),
        }
    }
    flush(&mut map, &cursor, &mut buffer);

    map
}

fn flush(map: &mut SectionMap, cursor: &Cursor, buffer: &mut Vec<&str>) {
    let content = buffer.join("\n").trim_matches('\n').trim().to_string();
    buffer.clear();

    match cursor {
        Cursor::None => {} // no header yet; nowhere to put it
        Cursor::Known(key) => {
            if content.is_empty() {
                return;
            }
            let bucket = map.bucket_mut(*key);
            if !bucket.is_empty() {
                bucket.push_str("\n\n");
            }
            bucket.push_str(&content);
        }
        Cursor::Custom(title) => {
            map.custom.push(CustomSection {
                title: title.clone(),
                content,
            });
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
