//! Certification extraction: one entry per non-empty line.
//!
//! Certification sections are the flattest of the buckets — typically
//! `Name - Issuer, Year` on a single line — so this extractor works
//! line-by-line rather than block-by-block. The date and URL are captured
//! and removed first so the name/issuer split only sees prose.

use crate::pipeline::entities::clean_field;
use crate::pipeline::entities::dates;
use crate::resume::Certification;
use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)[^\s|,;<>()]+").unwrap()
});

/// Extract certification entries from the certifications blob.
pub fn extract_certifications(blob: &str) -> Vec<Certification> {
    blob.lines()
        .map(|l| l.trim().trim_start_matches('•').trim())
        .filter(|l| !l.is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Certification> {
    let mut cert = Certification::default();

    let line = match URL_RE.find(line) {
        Some(m) => {
            cert.url = m.as_str().trim_end_matches(['.', ',', '/']).to_string();
            format!("{}{}", &line[..m.start()], &line[m.end()..])
        }
        None => line.to_string(),
    };

    if let Some(span) = dates::find_date_span(&line) {
        cert.date = span.start;
    }
    let line = dates::strip_date_spans(&line);

    // `Name | Issuer` / `Name, Issuer` / `Name - Issuer`, tried in that
    // order. The ASCII-hyphen split stays last so names like
    // `AWS Certified Architect – Associate` (en dash) survive intact.
    let (name, issuer) = if let Some((n, i)) = line.split_once(" | ") {
        (n, Some(i))
    } else if let Some((n, i)) = line.split_once(", ") {
        (n, Some(i))
    } else if let Some((n, i)) = line.split_once(" - ") {
        (n, Some(i))
    } else {
        (line.as_str(), None)
    };

    cert.name = clean_field(name);
    if cert.name.is_empty() {
        return None;
    }
    cert.issuer = issuer.map(|i| clean_field(i)).unwrap_or_default();
    Some(cert)
}

// ── Tests ────────────────────────────────────────────────────────────────
