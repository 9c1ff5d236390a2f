//! CLI binary for resume2json.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ParserOptions` and prints the parsed résumé as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use resume2json::{parse_file, ParserOptions, SectionKey};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Parse a resume to stdout
  resume2json resume.pdf

  # Pretty-printed JSON to a file
  resume2json resume.docx --pretty -o resume.json

  # Skip sections you handle elsewhere
  resume2json resume.pdf --skip-sections projects,certifications

  # Quiet mode for scripting (warnings suppressed on stderr,
  # still present in the JSON metadata)
  resume2json -q resume.txt | jq '.skills'

SUPPORTED FORMATS:
  .pdf    text-based PDFs (scanned/image-only PDFs are rejected)
  .docx   Word OOXML
  .doc    legacy Word files that are really OOXML archives
  .odt    OpenDocument text
  .rtf    Rich Text Format (best-effort)
  .txt    plain text

EXIT STATUS:
  0  parse succeeded (warnings, if any, are in metadata.warnings)
  1  fatal error: unsupported format, unreadable file, or scanned PDF
"#;

/// Parse résumé documents into structured JSON.
#[derive(Parser, Debug)]
#[command(
    name = "resume2json",
    version,
    about = "Parse resume documents (PDF, DOCX, ODT, RTF, TXT) into structured JSON",
    long_about = "Parse a resume document into a structured JSON record: contact details, \
work experience, education, skills, projects, certifications, and languages. \
Extraction is heuristic and never hard-fails on missing data — gaps are reported \
as warnings alongside a best-effort result.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the résumé document.
    input: PathBuf,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long, env = "RESUME2JSON_OUTPUT")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(short, long, env = "RESUME2JSON_PRETTY")]
    pretty: bool,

    /// Comma-separated section keys to skip
    /// (contact, summary, experience, education, skills, projects,
    /// certifications, languages).
    #[arg(long, env = "RESUME2JSON_SKIP_SECTIONS", value_delimiter = ',')]
    skip_sections: Vec<SectionKey>,

    /// Minimum extracted characters before a PDF counts as scanned.
    #[arg(long, env = "RESUME2JSON_MIN_PDF_TEXT", default_value_t = 100)]
    min_pdf_text: usize,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "RESUME2JSON_VERBOSE")]
    verbose: bool,

    /// Suppress warnings on stderr (they remain in metadata.warnings).
    #[arg(short, long, env = "RESUME2JSON_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    // ── Build options ────────────────────────────────────────────────────
    let options = ParserOptions::builder()
        .skip_sections(cli.skip_sections.iter().copied())
        .min_pdf_text_chars(cli.min_pdf_text)
        .build();

    // ── Run the parse ────────────────────────────────────────────────────
    let resume = parse_file(&cli.input, &options)
        .with_context(|| format!("Failed to parse {}", cli.input.display()))?;

    if !cli.quiet {
        for warning in &resume.metadata.warnings {
            eprintln!("warning: {warning}");
        }
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&resume).context("Failed to serialise result")?
    } else {
        serde_json::to_string(&resume).context("Failed to serialise result")?
    };

    match cli.output {
        Some(ref path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !cli.quiet {
                eprintln!(
                    "Parsed {} → {}  ({} warnings)",
                    cli.input.display(),
                    path.display(),
                    resume.metadata.warnings.len()
                );
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(json.as_bytes())
                .context("Failed to write to stdout")?;
            handle.write_all(b"\n").ok();
        }
    }

    Ok(())
}
