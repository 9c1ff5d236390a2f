//! Format detection: sniff the binary signature of the uploaded bytes.
//!
//! Extension-based dispatch decides which extractor runs; the signature is a
//! defense-in-depth cross-check against files whose extension lies about
//! their content (a `.pdf` that is really a Word archive, say). A mismatch
//! is surfaced as a warning, never a failure — container formats overlap
//! (ODT and DOCX share the ZIP signature), so the signature alone cannot
//! name the real format.

/// File signatures recognisable from the first four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// `%PDF`
    Pdf,
    /// `PK\x03\x04` — any OOXML/ODF ZIP container (DOCX, ODT, …).
    OfficeZip,
    /// `{\rt` — the start of `{\rtf`.
    Rtf,
    /// No recognised signature (plain text, legacy binaries, garbage).
    Unknown,
}

impl Signature {
    /// Human-readable tag used in warnings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Signature::Pdf => "pdf",
            Signature::OfficeZip => "office-zip",
            Signature::Rtf => "rtf",
            Signature::Unknown => "unknown",
        }
    }
}

/// Sniff the signature from the first four bytes of `data`.
pub fn sniff(data: &[u8]) -> Signature {
    if data.len() < 4 {
        return Signature::Unknown;
    }
    match &data[..4] {
        b"%PDF" => Signature::Pdf,
        [0x50, 0x4B, 0x03, 0x04] => Signature::OfficeZip,
        b"{\\rt" => Signature::Rtf,
        _ => Signature::Unknown,
    }
}
