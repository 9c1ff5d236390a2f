//! Project extraction: map the projects blob to project entries.

use crate::pipeline::entities::{clean_field, split_blocks};
use crate::resume::Project;
use once_cell::sync::Lazy;
use regex::Regex;

static TECH_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:tech(?:nologies)?(?:\s+used)?|stack|tech\s+stack|tools|built\s+with)\s*:\s*(.+)$")
        .unwrap()
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.|github\.com/)[^\s|,;<>()]+").unwrap()
});

/// Extract project entries from the projects blob.
pub fn extract_projects(blob: &str) -> Vec<Project> {
    split_blocks(blob)
        .into_iter()
        .filter_map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Option<Project> {
    let lines: Vec<&str> = block
        .lines()
        .map(|l| l.trim().trim_start_matches('•').trim())
        .filter(|l| !l.is_empty())
        .collect();

    let first = *lines.first()?;

    // `Name - one-line description` headers carry both fields.
    let (name_part, inline_desc) = match first.split_once(" - ") {
        Some((n, d)) => (n, Some(d)),
        None => (first, None),
    };
    let name = clean_field(name_part.trim_end_matches(':'));
    if name.is_empty() {
        return None;
    }

    let mut tech_stack = Vec::new();
    let mut description_lines: Vec<&str> = Vec::new();
    if let Some(d) = inline_desc {
        description_lines.push(d.trim());
    }

    for &line in &lines[1..] {
        if let Some(caps) = TECH_LINE_RE.captures(line) {
            tech_stack = caps[1]
                .split([',', ';', '|'])
                .map(|t| clean_field(t))
                .filter(|t| !t.is_empty())
                .collect();
        } else {
            description_lines.push(line);
        }
    }

    let url = URL_RE
        .find(block)
        .map(|m| m.as_str().trim_end_matches(['.', ',', '/']).to_string())
        .unwrap_or_default();

    Some(Project {
        name,
        description: description_lines.join("\n"),
        tech_stack,
        url,
    })
}

// ── Tests ────────────────────────────────────────────────────────────────
