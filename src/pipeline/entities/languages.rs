//! Language extraction: tokenize the languages blob into name/proficiency
//! pairs.
//!
//! Proficiency shows up either in parentheses (`Spanish (Fluent)`) or after
//! a separator (`Spanish - Native`, `Spanish: Native`); both forms map to
//! the same field.

use crate::pipeline::entities::clean_field;
use crate::resume::Language;
use once_cell::sync::Lazy;
use regex::Regex;

static PROFICIENCY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(native|bilingual|fluent|full\s+professional|professional\s+working|professional|working|conversational|intermediate|advanced|basic|beginner|elementary|limited)\b",
    )
    .unwrap()
});

/// Tokens longer than this are prose, not language names.
const MAX_LANGUAGE_CHARS: usize = 30;

/// Extract language entries from the languages blob.
pub fn extract_languages(blob: &str) -> Vec<Language> {
    let mut languages: Vec<Language> = Vec::new();

    for token in blob.split(|c| matches!(c, '\n' | ',' | ';' | '•')) {
        let token = token.trim();
        if token.is_empty() || token.chars().count() > MAX_LANGUAGE_CHARS {
            continue;
        }

        // Everything before the proficiency (or the whole token) is the
        // name, minus separators and parentheses.
        let (name_part, proficiency) = match PROFICIENCY_RE.find(token) {
            Some(m) => (&token[..m.start()], m.as_str().to_string()),
            None => (token, String::new()),
        };
        let name = clean_field(
            name_part.trim_matches(|c: char| {
                matches!(c, '(' | ')' | ':' | '-' | '–' | '—') || c.is_whitespace()
            }),
        );

        if name.is_empty() || !name.chars().any(|c| c.is_alphabetic()) {
            continue;
        }
        if languages.iter().any(|l| l.name == name) {
            continue;
        }
        languages.push(Language { name, proficiency });
    }

    languages
}

// ── Tests ────────────────────────────────────────────────────────────────
