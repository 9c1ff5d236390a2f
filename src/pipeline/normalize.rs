//! Text normalisation: deterministic cleanup of extracted résumé text.
//!
//! ## Why normalise?
//!
//! The extractors faithfully reproduce whatever the source document
//! contains, and real documents are messy in ways that are *visually
//! invisible* but break line-oriented heuristics downstream:
//!
//! - Runs of spaces/tabs where the author aligned columns by hand
//! - A different bullet glyph per template (`●`, `▪`, `-`, `*`, …)
//! - Date tokens written `06-2021` in one entry and `06/2021` in the next
//! - Page numbers exported as bare-integer lines mid-text
//!
//! This module applies cheap, deterministic regex/string rules that unify
//! those variants without touching content. Each rule is independently
//! testable, and the whole transform is **idempotent** —
//! `normalize(normalize(x)) == normalize(x)` — because callers may invoke it
//! defensively more than once.
//!
//! ## Rule Order
//!
//! Rules must run in this specific order: line endings first so every later
//! rule sees `\n`-separated lines, bullets before line-trimming so leading
//! indentation does not hide a glyph, and page-number removal before the
//! blank-line collapse so the deleted line does not leave a triple break.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all normalisation rules to extracted text.
///
/// Rules (applied in order):
/// 1. Normalise line endings (CRLF → LF)
/// 2. Collapse runs of spaces/tabs to a single space
/// 3. Map bullet glyphs and leading `-`/`*` to the canonical `•`
/// 4. Canonicalise `MM-YYYY` date tokens to `MM/YYYY` (months 1–12 only)
/// 5. Drop lines that are only a bare integer (page-number artifacts)
/// 6. Collapse 3+ consecutive newlines down to 2
/// 7. Trim every line, then trim the whole document
pub fn normalize(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = collapse_spaces(&s);
    let s = canonicalise_bullets(&s);
    let s = canonicalise_dates(&s);
    let s = drop_page_number_lines(&s);
    let s = collapse_blank_lines(&s);
    trim_lines(&s)
}

// ── Rule 1: Normalise line endings ───────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Collapse space/tab runs ──────────────────────────────────────

static RE_SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());

fn collapse_spaces(input: &str) -> String {
    RE_SPACE_RUN.replace_all(input, " ").to_string()
}

// ── Rule 3: Canonicalise bullets ─────────────────────────────────────────
//
// The glyph set covers the bullets produced by common résumé templates.
// A leading `-` or `*` only counts when followed by whitespace, so markdown
// horizontal rules and words like `-ish` survive.

static RE_BULLET_GLYPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[•·∙●○◦▪▫■□▸▹►▻⦿⦾][ \t]*").unwrap());
static RE_BULLET_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*][ \t]+").unwrap());

fn canonicalise_bullets(input: &str) -> String {
    let s = RE_BULLET_GLYPH.replace_all(input, "• ");
    RE_BULLET_DASH.replace_all(&s, "• ").to_string()
}

// ── Rule 4: Canonicalise date tokens ─────────────────────────────────────
//
// `06-2021`, `06–2021`, `06—2021` all become `06/2021`, but only when the
// numeric month is in [1, 12]. The guard keeps phone fragments and other
// digit pairs that are not dates untouched.

static RE_DATE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2})[-–—](\d{4})\b").unwrap());

fn canonicalise_dates(input: &str) -> String {
    RE_DATE_TOKEN
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let month: u32 = caps[1].parse().unwrap_or(0);
            if (1..=12).contains(&month) {
                format!("{}/{}", &caps[1], &caps[2])
            } else {
                caps[0].to_string()
            }
        })
        .to_string()
}

// ── Rule 5: Drop page-number lines ───────────────────────────────────────

static RE_PAGE_NUMBER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+[ \t]*(\n|$)").unwrap());

fn drop_page_number_lines(input: &str) -> String {
    RE_PAGE_NUMBER_LINE.replace_all(input, "").to_string()
}

// ── Rule 6: Collapse excessive blank lines ───────────────────────────────

static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

fn collapse_blank_lines(input: &str) -> String {
    RE_BLANK_LINES.replace_all(input, "\n\n").to_string()
}

// ── Rule 7: Trim lines and document ──────────────────────────────────────

fn trim_lines(input: &str) -> String {
    input
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────
