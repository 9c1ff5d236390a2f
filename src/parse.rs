//! Parsing entry points: the orchestrator sequencing every pipeline stage.
//!
//! ## Failure policy
//!
//! Only the dispatch and extraction steps can fail (unsupported extension,
//! unreadable binary, scanned PDF). Every later stage is total: it cannot
//! abort the parse, it can only add warnings. The warning list is an
//! explicit accumulator threaded through the steps — not a logging side
//! effect — so the "push a warning and continue" behaviour is itself
//! testable.
//!
//! One invocation owns all of its intermediate values; nothing is shared or
//! cached between parses, so callers may run any number of parses in
//! parallel without coordination.

use crate::error::ResumeParseError;
use crate::options::{ParserOptions, SectionKey};
use crate::pipeline::detect::{self, Signature};
use crate::pipeline::entities::{
    certifications, contact, education, experience, languages, projects, skills,
};
use crate::pipeline::extract::{self, FileType};
use crate::pipeline::{normalize, segment};
use crate::resume::{ParsedResume, ResumeMetadata};
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};

/// Parse a résumé from an in-memory byte buffer.
///
/// This is the primary entry point for the library. `file_name` drives the
/// extension-based format dispatch; the binary signature is only a
/// cross-check.
///
/// # Errors
/// Returns `Err(ResumeParseError)` only for fatal conditions:
/// - Unsupported file extension
/// - Corrupt/password-protected/unreadable binary
/// - Scanned (image-only) PDF
///
/// Missing or suspect data never fails a parse; it accumulates in
/// `metadata.warnings` on the returned record.
pub fn parse_bytes(
    bytes: &[u8],
    file_name: &str,
    options: &ParserOptions,
) -> Result<ParsedResume, ResumeParseError> {
    info!(file_name, bytes = bytes.len(), "parsing resume");

    // ── Step 1: Dispatch by extension, cross-check the signature ─────────
    let extension = extract::extension_of(file_name);
    let file_type = FileType::from_extension(&extension)
        .ok_or(ResumeParseError::UnsupportedFormat { extension })?;

    let mut warnings: Vec<String> = Vec::new();
    let signature = detect::sniff(bytes);
    if let Some(expected) = file_type.expected_signature() {
        if signature != Signature::Unknown && signature != expected {
            warnings.push(format!(
                "File content has a '{}' signature but the extension says '.{}'; \
                 parsing by extension",
                signature.as_str(),
                file_type.as_str()
            ));
        }
    }

    // ── Step 2: Extract text (the only fallible stage) ───────────────────
    let extracted = extract::extract_text(bytes, file_type, options.min_pdf_text_chars)?;
    warnings.extend(extracted.warnings);
    if extracted.text.trim().is_empty() {
        warnings.push("No text content could be extracted from the document".to_string());
    }

    // ── Step 3: Normalise ────────────────────────────────────────────────
    let text = normalize::normalize(&extracted.text);
    debug!(chars = text.len(), "normalised text");

    // ── Step 4: Segment into sections ────────────────────────────────────
    let map = segment::segment(&text);
    debug!(custom_sections = map.custom.len(), "segmented");

    // ── Step 5: Extract entities per bucket ──────────────────────────────
    // Contact falls back to the whole document: name/email/phone often sit
    // in a layout the contact-block heuristic cannot claim.
    let contact_info = if options.skips(SectionKey::Contact) {
        Default::default()
    } else {
        let blob = if map.contact.is_empty() { text.as_str() } else { &map.contact };
        contact::extract_contact_info(blob)
    };

    let experience_entries = if options.skips(SectionKey::Experience) {
        Vec::new()
    } else {
        experience::extract_experience(&map.experience)
    };
    let education_entries = if options.skips(SectionKey::Education) {
        Vec::new()
    } else {
        education::extract_education(&map.education)
    };
    let skill_list = if options.skips(SectionKey::Skills) {
        Vec::new()
    } else {
        skills::extract_skills(&map.skills)
    };
    let project_entries = if options.skips(SectionKey::Projects) {
        Vec::new()
    } else {
        projects::extract_projects(&map.projects)
    };
    let certification_entries = if options.skips(SectionKey::Certifications) {
        Vec::new()
    } else {
        certifications::extract_certifications(&map.certifications)
    };
    let language_entries = if options.skips(SectionKey::Languages) {
        Vec::new()
    } else {
        languages::extract_languages(&map.languages)
    };

    let summary = if options.skips(SectionKey::Summary) {
        String::new()
    } else {
        map.summary.trim().to_string()
    };

    // ── Step 6: Missing-data warnings ────────────────────────────────────
    // Sections the caller skipped are not warned about: the data is absent
    // because we were told not to look.
    if !options.skips(SectionKey::Contact) {
        if contact_info.full_name.is_empty() {
            warnings.push("No candidate name could be identified".to_string());
        }
        if contact_info.email.is_empty() {
            warnings.push("No email address found".to_string());
        }
        if contact_info.phone.is_empty() {
            warnings.push("No phone number found".to_string());
        }
    }
    if !options.skips(SectionKey::Experience) && experience_entries.is_empty() {
        warnings.push("No work experience entries found".to_string());
    }
    if !options.skips(SectionKey::Education) && education_entries.is_empty() {
        warnings.push("No education entries found".to_string());
    }
    if !options.skips(SectionKey::Skills) && skill_list.is_empty() {
        warnings.push("No skills found".to_string());
    }

    // ── Step 7: Assemble and run structural validation ───────────────────
    let mut resume = ParsedResume {
        contact: contact_info,
        summary,
        experience: experience_entries,
        education: education_entries,
        skills: skill_list,
        projects: project_entries,
        certifications: certification_entries,
        languages: language_entries,
        custom_sections: map.custom,
        metadata: ResumeMetadata {
            file_name: file_name.to_string(),
            file_type: file_type.as_str().to_string(),
            parsed_at: Utc::now(),
            warnings: Vec::new(),
        },
    };
    warnings.extend(crate::validate::validate_parsed_resume(&resume));
    resume.metadata.warnings = warnings;

    info!(
        experience = resume.experience.len(),
        education = resume.education.len(),
        skills = resume.skills.len(),
        warnings = resume.metadata.warnings.len(),
        "parse complete"
    );
    Ok(resume)
}

/// Parse a résumé from a file on disk.
///
/// Convenience wrapper over [`parse_bytes`]; the file name used for
/// dispatch is the path's final component.
pub fn parse_file(
    path: impl AsRef<Path>,
    options: &ParserOptions,
) -> Result<ParsedResume, ResumeParseError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ResumeParseError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => ResumeParseError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ResumeParseError::Io(e),
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    parse_bytes(&bytes, &file_name, options)
}
