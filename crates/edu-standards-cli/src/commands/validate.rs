use std::path::Path;

use edu_standards_core::{ComplianceEngine, EducationalValidationResult, ValidationRequest};
use serde::Serialize;
use tracing::info;

use super::render_messages;
use crate::error::CliError;
use crate::reader::{load_config, read_request_files};

#[derive(Serialize)]
struct FileResult<'a> {
    file: &'a str,
    kind: &'static str,
    result: &'a EducationalValidationResult,
}

fn request_kind(request: &ValidationRequest) -> &'static str {
    match request {
        ValidationRequest::LessonPlan(_) => "lessonPlan",
        ValidationRequest::Presentation(_) => "presentation",
        ValidationRequest::Assessment(_) => "assessment",
    }
}

/// Validate every request file under `input_path`.
/// Returns the rendered output and the number of invalid requests.
pub fn run_validate(
    input_path: &Path,
    format: &str,
    config_path: Option<&Path>,
) -> Result<(String, usize), CliError> {
    let config = load_config(config_path, input_path)?;
    let files = read_request_files(input_path, &config)?;

    if files.is_empty() {
        return Err(CliError::NoRequests(input_path.display().to_string()));
    }

    let engine = ComplianceEngine::new(config.engine);

    let mut outcomes: Vec<(&str, &'static str, EducationalValidationResult)> = Vec::new();
    for f in &files {
        let request: ValidationRequest =
            serde_json::from_str(&f.content).map_err(|source| CliError::Request {
                path: f.path.clone(),
                source,
            })?;
        let result = engine.validate_request(&request);
        outcomes.push((f.path.as_str(), request_kind(&request), result));
    }

    let invalid_count = outcomes.iter().filter(|(_, _, r)| !r.is_valid).count();
    let warning_count: usize = outcomes.iter().map(|(_, _, r)| r.warnings.len()).sum();
    let request_count = outcomes.len();

    info!(
        requests = request_count,
        invalid = invalid_count,
        warnings = warning_count,
        "validation finished"
    );

    if format == "json" {
        let results: Vec<FileResult> = outcomes
            .iter()
            .map(|&(file, kind, ref result)| FileResult { file, kind, result })
            .collect();
        let output = serde_json::json!({
            "results": results,
            "summary": {
                "requests": request_count,
                "invalid": invalid_count,
                "warnings": warning_count,
            }
        });
        return Ok((serde_json::to_string_pretty(&output)?, invalid_count));
    }

    // Human-readable format
    let mut lines: Vec<String> = Vec::new();

    for (file, kind, result) in &outcomes {
        let status = if result.is_valid { "valid" } else { "invalid" };
        lines.push(format!(
            "{file} [{kind}]: {status} (score {})",
            result.compliance_score
        ));
        render_messages(result, &mut lines);
    }

    let request_word = if request_count == 1 { "request" } else { "requests" };
    let warning_word = if warning_count == 1 {
        "warning"
    } else {
        "warnings"
    };
    lines.push(format!(
        "{request_count} {request_word}, {invalid_count} invalid, {warning_count} {warning_word}."
    ));

    Ok((lines.join("\n"), invalid_count))
}
