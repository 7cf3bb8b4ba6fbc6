use clap::Subcommand;
use edu_standards_core::{
    validate_grade_level, validate_pedagogical_standard, validate_subject,
    EducationalValidationResult,
};

use super::render_messages;

#[derive(Subcommand)]
pub enum FieldCheck {
    /// Check a grade level (6-9)
    Grade {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Check a subject name
    Subject { value: String },

    /// Check a pedagogical standard name
    Standard { value: String },
}

/// Run one single-field validator. Returns the rendered output and whether it passed.
pub fn run_field(check: &FieldCheck) -> (String, bool) {
    let result: EducationalValidationResult = match check {
        FieldCheck::Grade { value } => validate_grade_level(*value),
        FieldCheck::Subject { value } => validate_subject(value),
        FieldCheck::Standard { value } => validate_pedagogical_standard(value),
    };

    let mut lines = vec![format!(
        "{} (score {})",
        if result.is_valid { "valid" } else { "invalid" },
        result.compliance_score
    )];
    render_messages(&result, &mut lines);
    (lines.join("\n"), result.is_valid)
}
