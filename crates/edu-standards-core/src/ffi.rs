//! JSON-in / JSON-out API for the web layer and language bindings.
//!
//! Every function returns a `{ success, data?, error? }` envelope and never
//! panics across the boundary. `success: false` means the input could not be
//! read; a readable input with validation errors is still `success: true`
//! with `data.isValid == false`.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::bloom::validate_bloom_taxonomy;
use crate::orchestrator::STANDARD_ENGINE;
use crate::types::*;
use crate::validator::{validate_grade_level, validate_pedagogical_standard, validate_subject};

// ---------------------------------------------------------------------------
// Options types (deserialized from JSON input)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentOptions {
    pub grade_level: i64,
    #[serde(default)]
    pub subject: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomOptions {
    #[serde(default)]
    pub bloom_levels: Vec<BloomLevel>,
    pub grade_level: i64,
    pub question_count: i64,
}

// ---------------------------------------------------------------------------
// Result envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn failure(message: impl Into<String>) -> String {
    serde_json::json!({ "success": false, "error": message.into() }).to_string()
}

fn respond<T: Serialize>(run: impl FnOnce() -> T) -> String {
    match catch_unwind(AssertUnwindSafe(run)) {
        Ok(data) => serde_json::to_string(&FfiResult {
            success: true,
            data: Some(data),
            error: None,
        })
        .unwrap_or_else(|e| failure(format!("JSON serialization error: {e}"))),
        Err(_) => failure("Internal validation panic"),
    }
}

fn parse_input<I: DeserializeOwned>(json: &str, what: &str) -> Result<I, String> {
    serde_json::from_str(json).map_err(|e| failure(format!("Invalid {what} JSON: {e}")))
}

// ---------------------------------------------------------------------------
// Public JSON functions
// ---------------------------------------------------------------------------

/// Validate a request tagged by `kind` (`lessonPlan`, `presentation`, `assessment`).
pub fn validate_request_to_json(request_json: &str) -> String {
    match parse_input::<ValidationRequest>(request_json, "request") {
        Ok(request) => respond(|| STANDARD_ENGINE.validate_request(&request)),
        Err(e) => e,
    }
}

pub fn validate_lesson_plan_to_json(input_json: &str) -> String {
    match parse_input::<LessonPlanInput>(input_json, "lesson plan") {
        Ok(input) => respond(|| STANDARD_ENGINE.validate_lesson_plan(&input)),
        Err(e) => e,
    }
}

pub fn validate_presentation_to_json(input_json: &str) -> String {
    match parse_input::<PresentationInput>(input_json, "presentation") {
        Ok(input) => respond(|| STANDARD_ENGINE.validate_presentation(&input)),
        Err(e) => e,
    }
}

pub fn validate_assessment_to_json(input_json: &str) -> String {
    match parse_input::<AssessmentInput>(input_json, "assessment") {
        Ok(input) => respond(|| STANDARD_ENGINE.validate_assessment(&input)),
        Err(e) => e,
    }
}

/// Full standards report for raw content.
///
/// Options: `{ "gradeLevel": number, "subject"?: string }`
pub fn validate_content_to_json(content: &str, options_json: &str) -> String {
    match parse_input::<ContentOptions>(options_json, "options") {
        Ok(opts) => respond(|| {
            STANDARD_ENGINE.validate_lesson_content(content, opts.grade_level, &opts.subject)
        }),
        Err(e) => e,
    }
}

/// Options: `{ "bloomLevels": string[], "gradeLevel": number, "questionCount": number }`
pub fn validate_bloom_to_json(options_json: &str) -> String {
    match parse_input::<BloomOptions>(options_json, "options") {
        Ok(opts) => respond(|| {
            validate_bloom_taxonomy(&opts.bloom_levels, opts.grade_level, opts.question_count)
        }),
        Err(e) => e,
    }
}

pub fn validate_grade_level_to_json(grade_level: i64) -> String {
    respond(|| validate_grade_level(grade_level))
}

pub fn validate_subject_to_json(subject: &str) -> String {
    respond(|| validate_subject(subject))
}

pub fn validate_standard_to_json(standard: &str) -> String {
    respond(|| validate_pedagogical_standard(standard))
}
