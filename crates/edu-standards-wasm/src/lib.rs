//! Educational standards engine WASM bindings.
//!
//! Provides JavaScript-callable functions via wasm-bindgen.
//! All functions take string (or number) inputs and return JSON strings
//! shaped `{ success: boolean, data?: T, error?: string }`.

use edu_standards_core::{
    validate_assessment_to_json, validate_bloom_to_json, validate_content_to_json,
    validate_grade_level_to_json, validate_lesson_plan_to_json, validate_presentation_to_json,
    validate_request_to_json, validate_standard_to_json, validate_subject_to_json,
    PedagogicalStandard, Subject, ENGINE_VERSION,
};
use wasm_bindgen::prelude::*;

/// Validate a request tagged with `kind` (`lessonPlan`, `presentation`, `assessment`).
///
/// @returns JSON string with `{ success: boolean, data?: EducationalValidationResult, error?: string }`
#[wasm_bindgen(js_name = "validateRequest")]
pub fn wasm_validate_request(request_json: &str) -> String {
    validate_request_to_json(request_json)
}

#[wasm_bindgen(js_name = "validateLessonPlan")]
pub fn wasm_validate_lesson_plan(input_json: &str) -> String {
    validate_lesson_plan_to_json(input_json)
}

#[wasm_bindgen(js_name = "validatePresentation")]
pub fn wasm_validate_presentation(input_json: &str) -> String {
    validate_presentation_to_json(input_json)
}

#[wasm_bindgen(js_name = "validateAssessment")]
pub fn wasm_validate_assessment(input_json: &str) -> String {
    validate_assessment_to_json(input_json)
}

/// Score raw lesson content against GDPT 2018, CV 5512 and the terminology list.
///
/// @param content - Lesson text
/// @param options_json - JSON options `{ gradeLevel: number, subject?: string }`
/// @returns JSON string with `{ success: boolean, data?: StandardsComplianceReport, error?: string }`
#[wasm_bindgen(js_name = "validateLessonContent")]
pub fn wasm_validate_lesson_content(content: &str, options_json: &str) -> String {
    validate_content_to_json(content, options_json)
}

/// @param options_json - JSON `{ bloomLevels: string[], gradeLevel: number, questionCount: number }`
#[wasm_bindgen(js_name = "validateBloomTaxonomy")]
pub fn wasm_validate_bloom_taxonomy(options_json: &str) -> String {
    validate_bloom_to_json(options_json)
}

#[wasm_bindgen(js_name = "validateGradeLevel")]
pub fn wasm_validate_grade_level(grade_level: i32) -> String {
    validate_grade_level_to_json(i64::from(grade_level))
}

#[wasm_bindgen(js_name = "validateSubject")]
pub fn wasm_validate_subject(subject: &str) -> String {
    validate_subject_to_json(subject)
}

#[wasm_bindgen(js_name = "validatePedagogicalStandard")]
pub fn wasm_validate_pedagogical_standard(standard: &str) -> String {
    validate_standard_to_json(standard)
}

/// Engine version plus the accepted subject and standard names, for populating form pickers.
#[wasm_bindgen(js_name = "engineInfo")]
pub fn wasm_engine_info() -> String {
    let subjects: Vec<&str> = Subject::ALL.iter().map(|s| s.name()).collect();
    let standards = [
        PedagogicalStandard::Gdpt2018.name(),
        PedagogicalStandard::Cv5512.name(),
    ];
    serde_json::json!({
        "success": true,
        "data": {
            "engineVersion": ENGINE_VERSION,
            "subjects": subjects,
            "standards": standards,
        }
    })
    .to_string()
}
