pub mod content;
pub mod field;
pub mod validate;

use edu_standards_core::EducationalValidationResult;

/// Indented human-readable lines for one envelope's messages.
pub(crate) fn render_messages(result: &EducationalValidationResult, lines: &mut Vec<String>) {
    for e in &result.errors {
        lines.push(format!("  error: {e}"));
    }
    for w in &result.warnings {
        lines.push(format!("  warning: {w}"));
    }
    for s in &result.suggestions {
        lines.push(format!("  suggestion: {s}"));
    }
}
