//! Education extraction: map the education blob to degree entries.
//!
//! Education blocks are flatter than experience blocks — usually an
//! institution line and a degree line in either order — so this extractor
//! matches labelled lines rather than splitting on separators. A block with
//! neither a degree nor an institution is dropped as noise.

use crate::pipeline::entities::dates;
use crate::pipeline::entities::{clean_field, split_blocks};
use crate::resume::Education;
use once_cell::sync::Lazy;
use regex::Regex;

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(bachelor(?:'s)?|master(?:'s)?|ph\.?d\.?|doctor(?:ate)?|associate(?:'s)?|b\.?sc?\.?|m\.?sc?\.?|b\.?a\.?|m\.?a\.?|m\.?b\.?a\.?|b\.?tech|m\.?tech|diploma)\b[^,\n]*",
    )
    .unwrap()
});

static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(university|college|institute|school|academy|polytechnic)\b").unwrap()
});

static FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bin\s+([A-Za-z][A-Za-z&' ]+)").unwrap());

static GPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bGPA\s*:?\s*([0-4](?:\.\d{1,2})?)\b").unwrap());

/// Extract degree entries from the education blob.
pub fn extract_education(blob: &str) -> Vec<Education> {
    split_blocks(blob)
        .into_iter()
        .filter_map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Option<Education> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut entry = Education::default();

    for line in &lines {
        let line = line.trim_start_matches('•').trim();
        if entry.degree.is_empty() {
            if let Some(m) = DEGREE_RE.find(line) {
                let degree_text = dates::strip_date_spans(m.as_str());
                entry.degree = clean_field(&degree_text);
                if let Some(caps) = FIELD_RE.captures(&entry.degree) {
                    entry.field = clean_field(&caps[1]);
                }
            }
        }
        if entry.institution.is_empty() && INSTITUTION_RE.is_match(line) {
            let text = dates::strip_date_spans(line);
            // Keep the institution name; a trailing `, City, ST` tail stays
            // out of the identity field.
            let name = text.split(',').next().unwrap_or(&text);
            entry.institution = clean_field(name);
        }
    }

    if entry.degree.is_empty() && entry.institution.is_empty() {
        return None;
    }

    if let Some(span) = dates::find_date_span(block) {
        entry.start_date = span.start;
        entry.end_date = span.end;
    }
    if let Some(caps) = GPA_RE.captures(block) {
        entry.gpa = caps[1].to_string();
    }

    Some(entry)
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_and_institution_on_separate_lines() {
        let entries = extract_education(
            "Bachelor of Science in Computer Science\nUniversity of Washington\n2014 - 2018\nGPA: 3.8",
        );
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.degree, "Bachelor of Science in Computer Science");
        assert_eq!(e.field, "Computer Science");
        assert_eq!(e.institution, "University of Washington");
        assert_eq!(e.start_date, "2014");
        assert_eq!(e.end_date, "2018");
        assert_eq!(e.gpa, "3.8");
    }

    #[test]
    fn institution_line_keeps_name_drops_location_tail() {
        let e = &extract_education("M.S. in Data Science\nStanford University, Stanford, CA")[0];
        assert_eq!(e.institution, "Stanford University");
        assert_eq!(e.degree, "M.S. in Data Science");
    }

    #[test]
    fn block_without_degree_or_institution_is_dropped() {
        assert!(extract_education("Relevant coursework: algorithms\n2019").is_empty());
    }

    #[test]
    fn institution_only_block_is_kept() {
        let e = &extract_education("Lakeside School\n2008 - 2012")[0];
        assert_eq!(e.institution, "Lakeside School");
        assert_eq!(e.degree, "");
    }

    #[test]
    fn gpa_without_colon() {
        let e = &extract_education("B.A. History\nOberlin College\nGPA 3.62")[0];
        assert_eq!(e.gpa, "3.62");
    }

    #[test]
    fn multiple_blocks() {
        let blob = "Master of Science in Robotics\nCarnegie Mellon University\n2019 - 2021\n\n\
                    Bachelor of Engineering\nPune Institute of Technology\n2014 - 2018";
        let entries = extract_education(blob);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].institution, "Carnegie Mellon University");
        assert_eq!(entries[1].degree, "Bachelor of Engineering");
    }

    #[test]
    fn missing_dates_and_gpa_stay_empty() {
        let e = &extract_education("PhD in Physics\nMIT... well, Massachusetts Institute of Technology")[0];
        assert!(e.start_date.is_empty());
        assert!(e.gpa.is_empty());
    }
}
