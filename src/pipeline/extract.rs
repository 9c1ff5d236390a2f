//! Text extraction: per-format adapters converting document bytes to a
//! single linear text string.
//!
//! Dispatch is by file extension (case-insensitive); the binary signature
//! from [`crate::pipeline::detect`] only cross-checks it. Each adapter
//! returns an [`ExtractedText`] carrying the text plus any non-fatal
//! structural warnings it hit along the way — a truncated XML stream inside
//! an otherwise readable DOCX should not cost the user the whole parse.
//!
//! This is the only pipeline stage that can fail: a corrupt archive, a
//! malformed PDF, or a scanned (image-only) PDF aborts the parse with a
//! fatal error. Everything downstream is total.

use crate::error::ResumeParseError;
use crate::pipeline::detect::Signature;
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use regex::Regex;
use std::io::{Cursor, Read};
use tracing::debug;

/// Supported input formats, dispatched by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Doc,
    Odt,
    Rtf,
    Txt,
}

impl FileType {
    /// Map a lowercase extension to a file type.
    pub fn from_extension(ext: &str) -> Option<FileType> {
        match ext {
            "pdf" => Some(FileType::Pdf),
            "docx" => Some(FileType::Docx),
            "doc" => Some(FileType::Doc),
            "odt" => Some(FileType::Odt),
            "rtf" => Some(FileType::Rtf),
            "txt" => Some(FileType::Txt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
            FileType::Doc => "doc",
            FileType::Odt => "odt",
            FileType::Rtf => "rtf",
            FileType::Txt => "txt",
        }
    }

    /// The binary signature this type is expected to carry, if it has one in
    /// the recognised set. Plain text and legacy `.doc` have none.
    pub fn expected_signature(&self) -> Option<Signature> {
        match self {
            FileType::Pdf => Some(Signature::Pdf),
            FileType::Docx | FileType::Odt => Some(Signature::OfficeZip),
            FileType::Rtf => Some(Signature::Rtf),
            FileType::Doc | FileType::Txt => None,
        }
    }
}

/// Lowercase extension of a file name, or empty when there is none.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Extraction result: linear text plus non-fatal structural warnings.
#[derive(Debug, Default)]
pub struct ExtractedText {
    pub text: String,
    pub warnings: Vec<String>,
}

impl ExtractedText {
    fn clean(text: String) -> Self {
        Self {
            text,
            warnings: Vec::new(),
        }
    }
}

/// Extract linear text from `data` according to `file_type`.
///
/// Every success path yields a string — possibly empty, which the
/// orchestrator treats as a warning condition rather than a failure.
pub fn extract_text(
    data: &[u8],
    file_type: FileType,
    min_pdf_text_chars: usize,
) -> Result<ExtractedText, ResumeParseError> {
    debug!(format = file_type.as_str(), bytes = data.len(), "extracting text");
    match file_type {
        FileType::Pdf => extract_pdf(data, min_pdf_text_chars),
        FileType::Docx | FileType::Doc => extract_office(data, "word/document.xml", file_type),
        FileType::Odt => extract_office(data, "content.xml", file_type),
        FileType::Txt => Ok(ExtractedText::clean(decode_text(data))),
        FileType::Rtf => Ok(ExtractedText::clean(strip_rtf(&decode_text(data)))),
    }
}

// ── PDF ──────────────────────────────────────────────────────────────────

fn extract_pdf(data: &[u8], min_chars: usize) -> Result<ExtractedText, ResumeParseError> {
    let text =
        pdf_extract::extract_text_from_mem(data).map_err(|e| ResumeParseError::Extraction {
            format: "pdf".into(),
            detail: e.to_string(),
        })?;
    ensure_min_pdf_text(&text, min_chars)?;
    Ok(ExtractedText::clean(text))
}

/// Reject near-empty PDF text: it signals an image-only page that this
/// pipeline deliberately does not OCR.
fn ensure_min_pdf_text(text: &str, min_chars: usize) -> Result<(), ResumeParseError> {
    let chars = text.trim().chars().count();
    if chars < min_chars {
        return Err(ResumeParseError::ScannedDocument { chars });
    }
    Ok(())
}

// ── Office containers (DOCX / DOC / ODT) ─────────────────────────────────
//
// Both OOXML and ODF are ZIP archives with one main XML document. We stream
// the XML and collect character data, mapping paragraph/tab/break elements
// to whitespace and discarding everything else (styling, tables-of-contents,
// revision marks).

fn extract_office(
    data: &[u8],
    entry_name: &str,
    file_type: FileType,
) -> Result<ExtractedText, ResumeParseError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(data)).map_err(|e| ResumeParseError::Extraction {
            format: file_type.as_str().into(),
            detail: format!("not a readable archive (password-protected or corrupt?): {e}"),
        })?;

    let mut xml = String::new();
    {
        let mut entry =
            archive
                .by_name(entry_name)
                .map_err(|_| ResumeParseError::Extraction {
                    format: file_type.as_str().into(),
                    detail: format!("archive has no '{entry_name}' entry"),
                })?;
        entry
            .read_to_string(&mut xml)
            .map_err(|e| ResumeParseError::Extraction {
                format: file_type.as_str().into(),
                detail: format!("failed to read '{entry_name}': {e}"),
            })?;
    }

    Ok(office_xml_text(&xml, file_type))
}

/// Collect the character content of a WordprocessingML or ODF content
/// document, inserting newlines at paragraph boundaries.
///
/// XML errors past the first well-formed prefix degrade to a warning: the
/// text gathered so far is still returned.
fn office_xml_text(xml: &str, file_type: FileType) -> ExtractedText {
    let mut reader = XmlReader::from_reader(xml.as_bytes());
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut warnings = Vec::new();
    // Depth of text-bearing containers we are inside: `w:p` for Word,
    // `text:p`/`text:h` for ODF.
    let mut para_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().local_name().as_ref() {
                b"p" | b"h" => para_depth += 1,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().local_name().as_ref() {
                b"p" | b"h" => {
                    para_depth = para_depth.saturating_sub(1);
                    out.push('\n');
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().local_name().as_ref() {
                b"tab" => out.push('\t'),
                b"br" | b"line-break" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if para_depth > 0 {
                    match e.unescape() {
                        Ok(t) => out.push_str(&t),
                        Err(e) => warnings.push(format!(
                            "{}: skipped malformed text run: {e}",
                            file_type.as_str()
                        )),
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                warnings.push(format!(
                    "{}: document XML is malformed past position {}: {e}; \
                     keeping the text extracted so far",
                    file_type.as_str(),
                    reader.buffer_position()
                ));
                break;
            }
            Ok(_) => {}
        }
        buf.clear();
    }

    ExtractedText { text: out, warnings }
}

// ── Plain text ───────────────────────────────────────────────────────────

/// Decode bytes as UTF-8, falling back to Windows-1252 when the input is not
/// valid UTF-8. Résumés saved from older Word versions commonly arrive in
/// the latter.
fn decode_text(data: &[u8]) -> String {
    let (text, had_errors) = match std::str::from_utf8(data) {
        Ok(s) => (s.to_string(), false),
        Err(_) => {
            let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(data);
            (decoded.into_owned(), had_errors)
        }
    };
    if had_errors {
        debug!("plain-text decode replaced undecodable bytes");
    }
    text
}

// ── RTF ──────────────────────────────────────────────────────────────────
//
// Best-effort, non-lossless conversion sufficient for prose: destination
// groups (font tables, colour tables, metadata) are dropped wholesale,
// control words are stripped, group braces removed, and literal escapes
// restored. Anything fancier (embedded objects, field codes) degrades to
// its plain text.

static RE_RTF_DESTINATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\\(?:\*|fonttbl|colortbl|stylesheet|info|pict|themedata|generator)").unwrap()
});
// `\s*` swallows the delimiter and any raw source newlines after the
// control word — line breaks in RTF source are not content, only `\par` is.
static RE_RTF_PAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\(?:par|line)\b\s*").unwrap());
static RE_RTF_TAB: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\tab\b ?").unwrap());
static RE_RTF_HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\'([0-9a-fA-F]{2})").unwrap());
static RE_RTF_CONTROL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\*?[a-zA-Z]+(-?\d+)? ?").unwrap());

/// Strip RTF control structure, leaving the prose content.
fn strip_rtf(input: &str) -> String {
    // Protect literal escapes with placeholders so neither the group scan
    // nor the control-word pass can eat them. U+0001..3 cannot occur in
    // valid RTF source.
    let s = input
        .replace(r"\\", "\u{1}")
        .replace(r"\{", "\u{2}")
        .replace(r"\}", "\u{3}");

    let s = drop_destination_groups(&s);
    let s = RE_RTF_PAR.replace_all(&s, "\n");
    let s = RE_RTF_TAB.replace_all(&s, "\t");
    let s = RE_RTF_HEX.replace_all(&s, |caps: &regex::Captures<'_>| {
        u8::from_str_radix(&caps[1], 16)
            .ok()
            .map(|b| {
                let bytes = [b];
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
                decoded.into_owned()
            })
            .unwrap_or_default()
    });
    let s = RE_RTF_CONTROL.replace_all(&s, "");
    let s = s.replace(r"\*", "").replace(['{', '}'], "");

    s.replace('\u{1}', "\\")
        .replace('\u{2}', "{")
        .replace('\u{3}', "}")
        .trim()
        .to_string()
}

/// Remove destination groups (`{\fonttbl …}`, `{\info …}`, `{\* …}`, …)
/// with their entire balanced-brace contents. Their payload is markup
/// bookkeeping, not prose; left in place, font names would leak into the
/// extracted text.
fn drop_destination_groups(input: &str) -> String {
    let mut s = input.to_string();
    while let Some(m) = RE_RTF_DESTINATION.find(&s) {
        let start = m.start();
        let mut depth = 0usize;
        let mut end = s.len();
        for (i, c) in s[start..].char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        end = start + i + c.len_utf8();
                        break;
                    }
                }
                _ => {}
            }
        }
        s.replace_range(start..end, "");
    }
    s
}

// ── Tests ────────────────────────────────────────────────────────────────
