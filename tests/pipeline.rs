//! End-to-end integration tests for resume2json.
//!
//! Every fixture is built in-memory — synthetic DOCX/ODT archives via the
//! `zip` crate, a synthetic PDF with computed xref offsets — so the suite
//! runs hermetically with no test-data downloads and no network access.

use resume2json::{parse_bytes, parse_file, ParserOptions, ResumeParseError, SectionKey};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

// ── Fixture builders ─────────────────────────────────────────────────────

const FULL_RESUME_TXT: &str = "\
Jane Smith
jane.smith@example.com | 555-123-4567 | Seattle, WA
linkedin.com/in/janesmith | github.com/janesmith | https://janesmith.dev

SUMMARY
Backend engineer with nine years of distributed-systems work.

EXPERIENCE
Senior Software Engineer at Acme Corp
06/2019 - Present
• Led migration of the billing pipeline to event sourcing
• Cut p99 checkout latency from 900ms to 180ms

Software Engineer | Initech | Austin, TX
07/2015 - 05/2019
• Built the internal feature-flag service used by forty teams

EDUCATION
Bachelor of Science in Computer Science
University of Washington
2011 - 2015
GPA: 3.8

SKILLS
Languages: Rust, Go, Python
Infrastructure: Kafka, Postgres, Kubernetes

PROJECTS
Flight Tracker - real-time ADS-B aggregator
Tech: Rust, Kafka
github.com/janesmith/flight-tracker

CERTIFICATIONS
AWS Certified Developer - Amazon, 2021

LANGUAGES
English (Native), Spanish (Conversational)

AWARDS
Dean's List 2014
";

/// Wrap a WordprocessingML body in a one-entry DOCX archive.
fn docx_from_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );
    zip_with_entry("word/document.xml", &xml)
}

/// Wrap ODF text paragraphs in a one-entry ODT archive.
fn odt_from_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<text:p>{p}</text:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <office:document-content \
         xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\" \
         xmlns:text=\"urn:oasis:names:tc:opendocument:xmlns:text:1.0\">\
         <office:body><office:text>{body}</office:text></office:body>\
         </office:document-content>"
    );
    zip_with_entry("content.xml", &xml)
}

fn zip_with_entry(name: &str, content: &str) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file(name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
        writer.finish().unwrap();
    }
    cursor.into_inner()
}

/// A structurally valid single-page PDF whose page content draws the given
/// text lines. Offsets in the xref table are computed, not hard-coded.
fn pdf_from_lines(lines: &[&str]) -> Vec<u8> {
    let mut content = String::from("BT /F1 12 Tf 72 720 Td 14 TL\n");
    for line in lines {
        content.push_str(&format!("({line}) Tj T*\n"));
    }
    content.push_str("ET\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut buf: Vec<u8> = Vec::new();
    buf.extend_from_slice(b"%PDF-1.4\n");
    let mut offsets = Vec::new();
    for (i, obj) in objects.iter().enumerate() {
        offsets.push(buf.len());
        buf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, obj).as_bytes());
    }
    let xref_pos = buf.len();
    buf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f \n");
    for off in &offsets {
        buf.extend_from_slice(format!("{off:010} 00000 n \n").as_bytes());
    }
    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_pos
        )
        .as_bytes(),
    );
    buf
}

// ── Plain text ───────────────────────────────────────────────────────────

#[test]
fn full_text_resume_extracts_every_section() {
    let resume =
        parse_bytes(FULL_RESUME_TXT.as_bytes(), "jane.txt", &ParserOptions::default()).unwrap();

    // Contact
    assert_eq!(resume.contact.full_name, "Jane Smith");
    assert_eq!(resume.contact.email, "jane.smith@example.com");
    assert_eq!(resume.contact.phone, "555-123-4567");
    assert_eq!(resume.contact.location, "Seattle, WA");
    assert_eq!(resume.contact.linkedin, "linkedin.com/in/janesmith");
    assert_eq!(resume.contact.github, "github.com/janesmith");
    assert_eq!(resume.contact.portfolio, "https://janesmith.dev");

    // Summary
    assert!(resume.summary.contains("distributed-systems work"));

    // Experience
    assert_eq!(resume.experience.len(), 2);
    let acme = &resume.experience[0];
    assert_eq!(acme.position, "Senior Software Engineer");
    assert_eq!(acme.company, "Acme Corp");
    assert_eq!(acme.start_date, "06/2019");
    assert!(acme.current);
    assert!(acme.description.contains("event sourcing"));
    let initech = &resume.experience[1];
    assert_eq!(initech.company, "Initech");
    assert_eq!(initech.location, "Austin, TX");
    assert!(!initech.current);

    // Education
    assert_eq!(resume.education.len(), 1);
    let edu = &resume.education[0];
    assert_eq!(edu.institution, "University of Washington");
    assert_eq!(edu.field, "Computer Science");
    assert_eq!(edu.gpa, "3.8");

    // Skills: labels stripped, order preserved
    assert_eq!(
        resume.skills,
        vec!["Rust", "Go", "Python", "Kafka", "Postgres", "Kubernetes"]
    );

    // Projects
    assert_eq!(resume.projects.len(), 1);
    assert_eq!(resume.projects[0].name, "Flight Tracker");
    assert_eq!(resume.projects[0].tech_stack, vec!["Rust", "Kafka"]);

    // Certifications
    assert_eq!(resume.certifications.len(), 1);
    assert_eq!(resume.certifications[0].issuer, "Amazon");

    // Languages
    assert_eq!(resume.languages.len(), 2);
    assert_eq!(resume.languages[1].proficiency, "Conversational");

    // Awards has no first-class slot: preserved as a custom section.
    assert_eq!(resume.custom_sections.len(), 1);
    assert_eq!(resume.custom_sections[0].title, "AWARDS");
    assert!(resume.custom_sections[0].content.contains("Dean's List"));

    // A fully-populated résumé still parses warning-free.
    assert!(
        resume.metadata.warnings.is_empty(),
        "unexpected warnings: {:?}",
        resume.metadata.warnings
    );
}

#[test]
fn sparse_resume_returns_with_warnings_not_errors() {
    let text = "NAME UNKNOWN\n\nSKILLS\nJavaScript, React, Node.js\n";
    let resume = parse_bytes(text.as_bytes(), "cv.txt", &ParserOptions::default()).unwrap();

    assert_eq!(resume.skills.len(), 3);
    assert!(resume.education.is_empty());
    let warnings = &resume.metadata.warnings;
    assert!(warnings.iter().any(|w| w.contains("education") || w.contains("Education")));
    assert!(warnings.iter().any(|w| w.contains("email")));
    assert!(warnings.iter().any(|w| w.contains("experience") || w.contains("Experience")));
}

// ── Options ──────────────────────────────────────────────────────────────

#[test]
fn skip_sections_bypasses_extraction() {
    let options = ParserOptions::builder()
        .skip_sections([SectionKey::Experience, SectionKey::Projects])
        .build();
    let resume = parse_bytes(FULL_RESUME_TXT.as_bytes(), "jane.txt", &options).unwrap();

    assert!(resume.experience.is_empty());
    assert!(resume.projects.is_empty());
    assert_eq!(resume.education.len(), 1, "unskipped sections still run");
    assert!(
        !resume.metadata.warnings.iter().any(|w| w.contains("experience")),
        "skipped sections must not produce emptiness warnings"
    );
}

// ── DOCX / ODT ───────────────────────────────────────────────────────────

#[test]
fn docx_resume_end_to_end() {
    let bytes = docx_from_paragraphs(&[
        "John Doe",
        "john@example.com | 555-987-6543",
        "",
        "EXPERIENCE",
        "Platform Engineer at Globex",
        "03/2018 - Present",
        "",
        "SKILLS",
        "Rust, Terraform",
    ]);
    let resume = parse_bytes(&bytes, "john.docx", &ParserOptions::default()).unwrap();

    assert_eq!(resume.metadata.file_type, "docx");
    assert_eq!(resume.contact.full_name, "John Doe");
    assert_eq!(resume.experience.len(), 1);
    assert_eq!(resume.experience[0].company, "Globex");
    assert_eq!(resume.skills, vec!["Rust", "Terraform"]);
}

#[test]
fn odt_resume_end_to_end() {
    let bytes = odt_from_paragraphs(&[
        "Ada Lovelace",
        "ada@example.com",
        "",
        "EXPERIENCE",
        "Analyst at Analytical Engines Ltd",
        "2019 - 2021",
    ]);
    let resume = parse_bytes(&bytes, "ada.odt", &ParserOptions::default()).unwrap();

    assert_eq!(resume.contact.full_name, "Ada Lovelace");
    assert_eq!(resume.experience.len(), 1);
    assert_eq!(resume.experience[0].position, "Analyst");
}

#[test]
fn corrupt_docx_is_a_fatal_extraction_error() {
    let err = parse_bytes(b"PK\x03\x04 this is not a zip", "cv.docx", &ParserOptions::default())
        .unwrap_err();
    assert!(matches!(err, ResumeParseError::Extraction { .. }));
}

// ── RTF ──────────────────────────────────────────────────────────────────

#[test]
fn rtf_resume_end_to_end() {
    let rtf = r"{\rtf1\ansi\deff0{\fonttbl{\f0 Arial;}}\f0\fs22
Maria Garcia\par
maria@example.com | 555-222-3333\par
\par
EXPERIENCE\par
Data Engineer at Umbrella Corp\par
02/2017 - 11/2021\par
}";
    let resume = parse_bytes(rtf.as_bytes(), "maria.rtf", &ParserOptions::default()).unwrap();

    assert_eq!(resume.metadata.file_type, "rtf");
    assert_eq!(resume.contact.full_name, "Maria Garcia");
    assert_eq!(resume.experience.len(), 1);
    assert_eq!(resume.experience[0].company, "Umbrella Corp");
    assert_eq!(resume.experience[0].end_date, "11/2021");
}

// ── PDF ──────────────────────────────────────────────────────────────────

#[test]
fn text_pdf_parses_with_lowered_threshold() {
    let bytes = pdf_from_lines(&[
        "Sam Rivera",
        "sam@example.com",
        "EXPERIENCE",
        "Engineer at Stark Industries",
        "01/2020 - 04/2023",
    ]);
    let options = ParserOptions::builder().min_pdf_text_chars(10).build();
    let resume = parse_bytes(&bytes, "sam.pdf", &options).unwrap();

    assert_eq!(resume.metadata.file_type, "pdf");
    assert_eq!(resume.contact.email, "sam@example.com");
    assert_eq!(resume.experience.len(), 1);
    assert_eq!(resume.experience[0].company, "Stark Industries");
}

#[test]
fn near_empty_pdf_fails_as_scanned_document() {
    // A valid PDF whose only text is far below the 100-char default.
    let bytes = pdf_from_lines(&["x"]);
    let err = parse_bytes(&bytes, "scan.pdf", &ParserOptions::default()).unwrap_err();
    assert!(
        matches!(err, ResumeParseError::ScannedDocument { .. }),
        "got: {err:?}"
    );
}

#[test]
fn garbage_pdf_is_a_fatal_extraction_error() {
    let err = parse_bytes(b"%PDF-1.4 but nothing else", "bad.pdf", &ParserOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ResumeParseError::Extraction { .. } | ResumeParseError::ScannedDocument { .. }
    ));
}

// ── Dispatch & files ─────────────────────────────────────────────────────

#[test]
fn unsupported_extension_rejected_before_extraction() {
    let err = parse_bytes(b"anything", "resume.pages", &ParserOptions::default()).unwrap_err();
    assert!(matches!(err, ResumeParseError::UnsupportedFormat { .. }));
}

#[test]
fn parse_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jane.txt");
    std::fs::write(&path, FULL_RESUME_TXT).unwrap();

    let resume = parse_file(&path, &ParserOptions::default()).unwrap();
    assert_eq!(resume.metadata.file_name, "jane.txt");
    assert_eq!(resume.contact.full_name, "Jane Smith");
}

#[test]
fn date_inversion_produces_warning_with_company() {
    let text = "Pat Doe\npat@example.com\n\nEXPERIENCE\nEngineer at Acme\n06/2022 - 01/2021\n";
    let resume = parse_bytes(text.as_bytes(), "pat.txt", &ParserOptions::default()).unwrap();

    assert_eq!(resume.experience.len(), 1);
    assert!(resume
        .metadata
        .warnings
        .iter()
        .any(|w| w.contains("Acme") && w.contains("earlier than")));
}
