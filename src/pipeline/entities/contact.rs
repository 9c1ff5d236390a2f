//! Contact extraction: regex-scan the contact blob for identity fields.
//!
//! The name heuristic is positional (the first line of the block is the
//! name) with one guard: when the document leads with the email or phone
//! instead, the name falls back to the second line. Portfolio links are the
//! left-over URL class — anything that is not LinkedIn, not GitHub, and not
//! an email counts.

use crate::resume::ContactInfo;
use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w._%+-]+@[\w.-]+\.[a-zA-Z]{2,}").unwrap());

/// Loose NANP-style phone pattern: optional country code, three digit
/// groups with flexible separators.
pub(crate) static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+?\d{1,2}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b").unwrap());

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/[^\s|,;<>()]+").unwrap());

static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[^\s|,;<>()]+").unwrap());

/// Generic website pattern. Requires a scheme or `www.` prefix so ordinary
/// dotted tokens (`Node.js`, `ASP.NET`) never register as links.
static WEBSITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)[^\s|,;<>()]+").unwrap());

/// Loose `City, ST` / `City, Region` pattern. Word separators stay on one
/// line (`[ \t]`, not `\s`) so a name line and a city line never fuse into
/// one match.
pub(crate) static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][A-Za-z.'-]+(?:[ \t]+[A-Z][A-Za-z.'-]+)*),[ \t]*([A-Z]{2}\b|[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*)").unwrap()
});

/// Scan `blob` for contact fields. Missing fields stay empty; this never
/// fails.
pub fn extract_contact_info(blob: &str) -> ContactInfo {
    let mut contact = ContactInfo::default();

    if let Some(m) = EMAIL_RE.find(blob) {
        contact.email = m.as_str().to_string();
    }
    if let Some(m) = PHONE_RE.find(blob) {
        contact.phone = m.as_str().trim().to_string();
    }
    if let Some(m) = LINKEDIN_RE.find(blob) {
        contact.linkedin = clean_url(m.as_str());
    }
    if let Some(m) = GITHUB_RE.find(blob) {
        contact.github = clean_url(m.as_str());
    }
    contact.portfolio = WEBSITE_RE
        .find_iter(blob)
        .map(|m| clean_url(m.as_str()))
        .find(|url| {
            let lower = url.to_lowercase();
            !lower.contains("linkedin.com") && !lower.contains("github.com") && !lower.contains('@')
        })
        .unwrap_or_default();

    contact.full_name = candidate_name(blob);

    if let Some(m) = LOCATION_RE.find(blob) {
        contact.location = m.as_str().trim().to_string();
    }

    contact
}

/// First line of the blob, unless it is email/phone-shaped — then the
/// second line.
fn candidate_name(blob: &str) -> String {
    let mut lines = blob.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = match lines.next() {
        Some(l) => l,
        None => return String::new(),
    };
    if EMAIL_RE.is_match(first) || PHONE_RE.is_match(first) {
        return lines.next().unwrap_or_default().to_string();
    }
    first.to_string()
}

fn clean_url(url: &str) -> String {
    url.trim().trim_end_matches(['.', ',', '/']).to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────
