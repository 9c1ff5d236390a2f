//! Skill extraction: tokenize the skills blob into bare skill strings.
//!
//! Skills sections are lists in disguise — comma runs, bullet lines,
//! `Category: a, b, c` rows — so extraction is tokenization plus cleanup.
//! Deduplication is case-sensitive on purpose: `go` the verb fragment and
//! `Go` the language are different tokens, and the editor downstream lets
//! the user merge what the heuristics kept apart.

/// Category labels longer than this are treated as content, not labels.
const MAX_LABEL_CHARS: usize = 30;
/// Tokens longer than this are prose fragments, not skills.
const MAX_SKILL_CHARS: usize = 50;

/// Extract skill tokens from the skills blob, deduplicated in source order.
pub fn extract_skills(blob: &str) -> Vec<String> {
    let mut skills = Vec::new();

    for line in blob.lines() {
        let line = line.trim().trim_start_matches('•').trim();
        if line.is_empty() {
            continue;
        }
        // `Languages: Rust, SQL` — drop the category label, keep the list.
        let line = match line.split_once(':') {
            Some((label, rest))
                if label.chars().count() <= MAX_LABEL_CHARS && !label.contains(',') =>
            {
                rest
            }
            _ => line,
        };

        for token in line.split(|c| matches!(c, ',' | ';' | '•' | '|')) {
            let token = token.trim().trim_end_matches('.').trim();
            if token.is_empty() || token.chars().count() > MAX_SKILL_CHARS {
                continue;
            }
            if !skills.iter().any(|s| s == token) {
                skills.push(token.to_string());
            }
        }
    }

    skills
}

// ── Tests ────────────────────────────────────────────────────────────────
