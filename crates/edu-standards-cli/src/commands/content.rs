use std::path::Path;

use edu_standards_core::{ComplianceEngine, StandardsComplianceReport};

use crate::error::CliError;
use crate::reader::{load_config, read_text};

/// Score a free-text lesson content file. Returns the rendered report.
pub fn run_content(
    input_path: &Path,
    grade_level: i64,
    subject: &str,
    format: &str,
    config_path: Option<&Path>,
) -> Result<String, CliError> {
    if !input_path.is_file() {
        return Err(CliError::NotFound(input_path.display().to_string()));
    }
    let config = load_config(config_path, input_path)?;
    let content = read_text(input_path)?;

    let engine = ComplianceEngine::new(config.engine);
    let report = engine.validate_lesson_content(&content, grade_level, subject);

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(render_report(&report))
}

fn render_report(report: &StandardsComplianceReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    let section = |label: &str, ok: bool, score: u32| {
        let mark = if ok { "ok" } else { "not met" };
        format!("{label}: {score}/100 ({mark})")
    };

    lines.push(section(
        "GDPT 2018",
        report.gdpt2018.is_compliant,
        report.gdpt2018.score,
    ));
    if !report.gdpt2018.missing.is_empty() {
        lines.push(format!("  missing: {}", report.gdpt2018.missing.join(", ")));
    }

    lines.push(section(
        "CV 5512",
        report.cv5512.is_compliant,
        report.cv5512.score,
    ));
    if !report.cv5512.missing.is_empty() {
        lines.push(format!("  missing: {}", report.cv5512.missing.join(", ")));
    }

    lines.push(section(
        "Terminology",
        report.terminology.is_valid,
        report.terminology.score,
    ));
    if !report.terminology.found_terms.is_empty() {
        lines.push(format!(
            "  found: {}",
            report.terminology.found_terms.join(", ")
        ));
    }

    lines.push(format!(
        "Overall: {}/100, grade {}",
        report.overall.score, report.overall.grade
    ));
    for r in &report.overall.recommendations {
        lines.push(format!("  - {r}"));
    }

    lines.join("\n")
}
