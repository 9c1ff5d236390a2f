//! Shared date heuristics for the entity extractors.
//!
//! Résumé dates come in three shapes — `January 2020` / `Jan. 2020`,
//! `01/2020`, and bare `2020` — usually joined into a range whose end may be
//! a "still here" word (`Present`, `Current`, …). The patterns here are the
//! single source of truth for all three shapes so the experience, education,
//! and certification extractors agree on what counts as a date.

use crate::resume::PRESENT;
use once_cell::sync::Lazy;
use regex::Regex;

/// A start/end pair as written in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpan {
    pub start: String,
    /// Empty when only a single date was found; [`PRESENT`] when `current`.
    pub end: String,
    pub current: bool,
}

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

/// One date token: `Month YYYY`, `MM/YYYY`, or bare `YYYY` (1900–2099).
fn date_token() -> String {
    format!(r"(?:{MONTH}\s+(?:19|20)\d{{2}}|\d{{1,2}}/(?:19|20)\d{{2}}|(?:19|20)\d{{2}})")
}

const RANGE_SEP: &str = r"(?:-|–|—|to|through|until)";
const OPEN_END: &str = r"(?:present|current|now|ongoing)";

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    let token = date_token();
    Regex::new(&format!(
        r"(?i)\b({token})\s*{RANGE_SEP}\s*({token}|{OPEN_END})\b"
    ))
    .unwrap()
});

static SINGLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b{}\b", date_token())).unwrap()
});

static PURE_DATE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    let token = date_token();
    Regex::new(&format!(
        r"(?i)^[(\[]?(?:{token})(?:\s*{RANGE_SEP}\s*(?:{token}|{OPEN_END}))?[)\]]?[.,;]?$"
    ))
    .unwrap()
});

fn is_open_end(s: &str) -> bool {
    matches!(
        s.to_lowercase().as_str(),
        "present" | "current" | "now" | "ongoing"
    )
}

/// Find the first date span in `text`: a range if one exists, otherwise a
/// single date as the start with an empty end.
pub fn find_date_span(text: &str) -> Option<DateSpan> {
    if let Some(caps) = RANGE_RE.captures(text) {
        let start = caps[1].trim().to_string();
        let end_raw = caps[2].trim();
        let current = is_open_end(end_raw);
        return Some(DateSpan {
            start,
            end: if current {
                PRESENT.to_string()
            } else {
                end_raw.to_string()
            },
            current,
        });
    }
    SINGLE_RE.find(text).map(|m| DateSpan {
        start: m.as_str().to_string(),
        end: String::new(),
        current: false,
    })
}

/// Whether `line` consists solely of a date or date range (a date-only line
/// inside an entry block, e.g. `01/2020 - Present`).
pub fn is_date_line(line: &str) -> bool {
    PURE_DATE_LINE_RE.is_match(line.trim())
}

/// Remove any date ranges and single dates from `line`, cleaning up the
/// separators they leave behind. Used to isolate title/company text on lines
/// that also carry the entry's dates.
pub fn strip_date_spans(line: &str) -> String {
    let s = RANGE_RE.replace_all(line, "");
    let s = SINGLE_RE.replace_all(&s, "");
    let s = s.replace("()", "").replace("[]", "");
    s.trim()
        .trim_matches(|c: char| matches!(c, '|' | ',' | '-' | '–' | '—') || c.is_whitespace())
        .trim()
        .to_string()
}

/// Map a date string to a comparable month ordinal (`year * 12 + month`).
///
/// Bare years compare as month 0 so `2020` sorts before `01/2020`; that is
/// good enough for the "end before start" sanity check, which only cares
/// about gross inversions.
pub fn date_ordinal(s: &str) -> Option<i32> {
    let s = s.trim();
    if let Some((m, y)) = s.split_once('/') {
        let month: i32 = m.trim().parse().ok()?;
        let year: i32 = y.trim().parse().ok()?;
        return Some(year * 12 + month);
    }
    if let Some((name, y)) = s.split_once(char::is_whitespace) {
        let month = month_number(name)?;
        let year: i32 = y.trim().parse().ok()?;
        return Some(year * 12 + month);
    }
    let year: i32 = s.parse().ok()?;
    Some(year * 12)
}

fn month_number(name: &str) -> Option<i32> {
    let lower = name.trim_end_matches('.').to_lowercase();
    let n = match lower.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_range_with_present() {
        let span = find_date_span("Software Engineer\n01/2020 - Present").unwrap();
        assert_eq!(span.start, "01/2020");
        assert_eq!(span.end, PRESENT);
        assert!(span.current);
    }

    #[test]
    fn month_name_range() {
        let span = find_date_span("June 2018 – March 2021").unwrap();
        assert_eq!(span.start, "June 2018");
        assert_eq!(span.end, "March 2021");
        assert!(!span.current);
    }

    #[test]
    fn year_only_range_with_to() {
        let span = find_date_span("2015 to 2019").unwrap();
        assert_eq!(span.start, "2015");
        assert_eq!(span.end, "2019");
    }

    #[test]
    fn single_date_fallback() {
        let span = find_date_span("Graduated May 2020").unwrap();
        assert_eq!(span.start, "May 2020");
        assert_eq!(span.end, "");
        assert!(!span.current);
    }

    #[test]
    fn no_date_yields_none() {
        assert!(find_date_span("Acme Corp\nDid some stuff").is_none());
    }

    #[test]
    fn five_digit_numbers_are_not_years() {
        assert!(find_date_span("ZIP 98101 only").is_none());
    }

    #[test]
    fn pure_date_lines() {
        assert!(is_date_line("01/2020 - Present"));
        assert!(is_date_line("Jan. 2019 — Dec. 2020"));
        assert!(is_date_line("(2018 - 2020)"));
        assert!(is_date_line("2021"));
        assert!(!is_date_line("Engineer since 01/2020"));
        assert!(!is_date_line("Acme Corp"));
    }

    #[test]
    fn strip_date_spans_cleans_header_lines() {
        assert_eq!(
            strip_date_spans("Senior Engineer - Acme Corp 01/2020 - Present"),
            "Senior Engineer - Acme Corp"
        );
        assert_eq!(strip_date_spans("Acme Corp (2019 - 2021)"), "Acme Corp");
        assert_eq!(strip_date_spans("No dates here"), "No dates here");
    }

    #[test]
    fn ordinals_compare_sensibly() {
        assert!(date_ordinal("01/2021").unwrap() < date_ordinal("06/2022").unwrap());
        assert!(date_ordinal("December 2019").unwrap() < date_ordinal("Jan 2020").unwrap());
        assert!(date_ordinal("2019").unwrap() < date_ordinal("2020").unwrap());
        assert_eq!(date_ordinal("Present"), None);
        assert_eq!(date_ordinal(""), None);
    }
}
