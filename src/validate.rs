//! Structural validation of an assembled résumé.
//!
//! Validation never rejects: every problem becomes a warning the caller can
//! show next to the pre-filled editor. The checks here run *after* entity
//! extraction because they relate fields to each other (start vs. end
//! dates) or to the record as a whole (is there any content at all?),
//! which no single extractor can see.

use crate::pipeline::entities::dates;
use crate::resume::ParsedResume;

/// Check an assembled résumé for internal inconsistencies, returning one
/// warning per finding.
pub fn validate_parsed_resume(resume: &ParsedResume) -> Vec<String> {
    let mut warnings = Vec::new();

    for (i, exp) in resume.experience.iter().enumerate() {
        let label = if exp.company.is_empty() {
            format!("experience entry {}", i + 1)
        } else {
            format!("experience at '{}'", exp.company)
        };

        if !exp.current {
            if let (Some(start), Some(end)) = (
                dates::date_ordinal(&exp.start_date),
                dates::date_ordinal(&exp.end_date),
            ) {
                if end < start {
                    warnings.push(format!(
                        "{label} has an end date ({}) earlier than its start date ({})",
                        exp.end_date, exp.start_date
                    ));
                }
            }
        }

        if exp.company.is_empty() {
            warnings.push(format!("{label} is missing a company name"));
        }
        if exp.position.is_empty() {
            warnings.push(format!("{label} is missing a position title"));
        }
    }

    for (i, edu) in resume.education.iter().enumerate() {
        let label = if edu.institution.is_empty() {
            format!("education entry {}", i + 1)
        } else {
            format!("education at '{}'", edu.institution)
        };
        if edu.institution.is_empty() {
            warnings.push(format!("{label} is missing an institution"));
        }
        if edu.degree.is_empty() {
            warnings.push(format!("{label} is missing a degree"));
        }
    }

    if resume.experience.is_empty() && resume.education.is_empty() && resume.skills.is_empty() {
        warnings.push(
            "Very little content was extracted; the document may not be a résumé or may use an \
             unusual layout"
                .to_string(),
        );
    }

    warnings
}
