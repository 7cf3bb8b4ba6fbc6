pub mod aggregate;
pub mod bloom;
pub mod catalogs;
pub mod config;
pub mod ffi;
pub mod orchestrator;
pub mod rules;
pub mod types;
pub mod validator;

pub use aggregate::{build_recommendations, classify_grade, combine};
pub use bloom::validate_bloom_taxonomy;
pub use catalogs::ENGINE_VERSION;
pub use config::{Calibration, ConfigError, EngineConfig, ReferenceSets};
pub use ffi::{
    validate_assessment_to_json, validate_bloom_to_json, validate_content_to_json,
    validate_grade_level_to_json, validate_lesson_plan_to_json, validate_presentation_to_json,
    validate_request_to_json, validate_standard_to_json, validate_subject_to_json,
};
pub use orchestrator::{
    validate_assessment, validate_lesson_content, validate_lesson_plan, validate_presentation,
    validate_request, ComplianceEngine, STANDARD_ENGINE,
};
pub use types::*;
pub use validator::{
    validate_grade_level, validate_pedagogical_standard, validate_question_count,
    validate_question_type, validate_required_text, validate_slide_count, validate_subject,
};
