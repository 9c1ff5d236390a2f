//! Experience extraction: map the experience blob to job entries.
//!
//! Each blank-line-delimited block is one candidate entry. A block is kept
//! only when a start date was found — a dateless block is unanchored noise
//! (a stray paragraph, a heading fragment) more often than a real job.
//!
//! Position vs. company on the header line is decided by separator, in
//! priority order: ` at ` (position first, unambiguous), then ` | `, then
//! ` - ` — where the side that looks like a job title wins the position
//! slot. With no separator at all, the entry is assumed to use a two-line
//! "position, then company" layout.

use crate::pipeline::entities::contact::LOCATION_RE;
use crate::pipeline::entities::dates::{self, DateSpan};
use crate::pipeline::entities::{clean_field, split_blocks};
use crate::resume::Experience;
use once_cell::sync::Lazy;
use regex::Regex;

/// Lines shorter than this are dropped from descriptions unless they are
/// bullets; stray fragments (orphaned city names, split words) cluster well
/// below it.
const MIN_DESCRIPTION_LINE_CHARS: usize = 20;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(engineer|developer|programmer|manager|director|analyst|designer|architect|consultant|scientist|researcher|administrator|specialist|coordinator|technician|intern|lead|officer|head|president|founder|recruiter|accountant|professor|teacher)\b",
    )
    .unwrap()
});

/// Extract job entries from the experience blob.
pub fn extract_experience(blob: &str) -> Vec<Experience> {
    split_blocks(blob)
        .into_iter()
        .filter_map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Option<Experience> {
    // Retention rule: no start date, no entry.
    let span: DateSpan = dates::find_date_span(block)?;

    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    // Informational lines: everything that is neither a pure date line nor
    // a description bullet.
    let info_indices: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| !dates::is_date_line(l) && !l.starts_with('•'))
        .map(|(i, _)| i)
        .collect();

    let mut position = String::new();
    let mut company = String::new();
    let mut consumed = Vec::new();

    if let Some(&first_idx) = info_indices.first() {
        consumed.push(first_idx);
        // The header line may carry the dates too; strip them so a date
        // range's own hyphen cannot masquerade as the ` - ` separator.
        let header = dates::strip_date_spans(lines[first_idx]);

        if let Some((p, c)) = header.split_once(" at ") {
            position = p.to_string();
            company = c.to_string();
        } else if let Some((p, c)) = header.split_once(" | ") {
            position = p.to_string();
            company = c.to_string();
        } else if let Some((left, right)) = header.split_once(" - ") {
            if TITLE_RE.is_match(left) || !TITLE_RE.is_match(right) {
                position = left.to_string();
                company = right.to_string();
            } else {
                position = right.to_string();
                company = left.to_string();
            }
        } else {
            // Two-line layout: position line, then company line.
            position = header;
            if let Some(&second_idx) = info_indices.get(1) {
                company = dates::strip_date_spans(lines[second_idx]);
                consumed.push(second_idx);
            }
        }
    }

    // A trailing `| location` on the company token wins over the loose
    // whole-block scan.
    let mut location = String::new();
    if let Some((c, loc)) = company.rsplit_once(" | ") {
        location = loc.trim().to_string();
        company = c.to_string();
    } else if let Some(m) = LOCATION_RE.find(block) {
        location = m.as_str().trim().to_string();
    }

    let description = lines
        .iter()
        .enumerate()
        .filter(|(i, l)| {
            !consumed.contains(i)
                && !dates::is_date_line(l)
                && (l.starts_with('•') || l.chars().count() > MIN_DESCRIPTION_LINE_CHARS)
        })
        .map(|(_, l)| *l)
        .collect::<Vec<_>>()
        .join("\n");

    Some(Experience {
        company: clean_field(&company),
        position: clean_field(&position),
        location,
        start_date: span.start,
        end_date: span.end,
        current: span.current,
        description,
    })
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_separator_splits_position_and_company() {
        let entries = extract_experience("Software Engineer at Acme Corp\n01/2020 - Present");
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.position, "Software Engineer");
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.start_date, "01/2020");
        assert_eq!(e.end_date, "Present");
        assert!(e.current);
    }

    #[test]
    fn dateless_block_is_dropped() {
        assert!(extract_experience("Acme Corp\nDid some stuff").is_empty());
    }

    #[test]
    fn pipe_separator_with_trailing_location() {
        let entries =
            extract_experience("Data Analyst | Initech | Austin, TX\n06/2018 - 05/2020");
        let e = &entries[0];
        assert_eq!(e.position, "Data Analyst");
        assert_eq!(e.company, "Initech");
        assert_eq!(e.location, "Austin, TX");
        assert!(!e.current);
    }

    #[test]
    fn dash_separator_resolves_order_by_title_shape() {
        // Title on the left.
        let left = &extract_experience("Senior Engineer - Globex\n2019 - 2022")[0];
        assert_eq!(left.position, "Senior Engineer");
        assert_eq!(left.company, "Globex");

        // Title on the right: sides swap.
        let right = &extract_experience("Globex - Senior Engineer\n2019 - 2022")[0];
        assert_eq!(right.position, "Senior Engineer");
        assert_eq!(right.company, "Globex");
    }

    #[test]
    fn dates_on_header_line_do_not_shadow_the_separator() {
        let e = &extract_experience("Senior Engineer - Globex 01/2019 - 12/2022")[0];
        assert_eq!(e.position, "Senior Engineer");
        assert_eq!(e.company, "Globex");
        assert_eq!(e.start_date, "01/2019");
        assert_eq!(e.end_date, "12/2022");
    }

    #[test]
    fn two_line_layout() {
        let e = &extract_experience("Backend Developer\nHooli\n03/2021 - Present")[0];
        assert_eq!(e.position, "Backend Developer");
        assert_eq!(e.company, "Hooli");
    }

    #[test]
    fn entry_without_company_is_kept() {
        let e = &extract_experience("Freelance Consultant\n2020 - 2023")[0];
        assert_eq!(e.position, "Freelance Consultant");
        assert_eq!(e.company, "");
    }

    #[test]
    fn description_keeps_bullets_and_long_lines_only() {
        let blob = "Engineer at Acme\n01/2020 - Present\n\
                    • Shipped the billing rewrite\nok\n\
                    Maintained the ingestion cluster across three regions";
        let e = &extract_experience(blob)[0];
        assert!(e.description.contains("• Shipped the billing rewrite"));
        assert!(e.description.contains("Maintained the ingestion cluster"));
        assert!(!e.description.contains("ok"), "short fragments are noise");
    }

    #[test]
    fn multiple_blocks_yield_multiple_entries() {
        let blob = "Engineer at Acme\n01/2020 - Present\n\n\
                    Analyst at Initech\n06/2016 - 12/2019";
        let entries = extract_experience(blob);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Acme");
        assert_eq!(entries[1].company, "Initech");
    }

    #[test]
    fn trailing_punctuation_stripped_from_fields() {
        let e = &extract_experience("Engineer at Acme Corp.\n01/2020 - 02/2021")[0];
        assert_eq!(e.company, "Acme Corp");
    }

    #[test]
    fn location_found_from_block_body() {
        let e = &extract_experience("Engineer at Acme\nPortland, OR\n01/2020 - 02/2021")[0];
        assert_eq!(e.location, "Portland, OR");
    }

    #[test]
    fn empty_blob_yields_no_entries() {
        assert!(extract_experience("").is_empty());
    }
}
