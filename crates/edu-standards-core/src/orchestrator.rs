//! Composition of field validators, content checkers and the Bloom analyzer
//! into one envelope per input type.

use std::sync::LazyLock;

use tracing::debug;

use crate::aggregate::{aggregate_report, combine};
use crate::bloom::validate_bloom_taxonomy;
use crate::config::{ConfigError, EngineConfig};
use crate::rules::{
    KeywordComplianceChecker, KeywordProfile, NormalizedContent, TerminologyAnalyzer,
};
use crate::types::*;
use crate::validator::*;

/// Lesson plan and assessment content must be longer than this to be checked.
const LESSON_CONTENT_MIN_EXCLUSIVE: usize = 10;
/// Presentation content must be at least this long to be checked.
const PRESENTATION_CONTENT_MIN_INCLUSIVE: usize = 10;

/// Engine built from the standard catalogs, shared read-only.
pub static STANDARD_ENGINE: LazyLock<ComplianceEngine> =
    LazyLock::new(ComplianceEngine::default);

/// Stateless validation engine over one immutable configuration.
#[derive(Debug, Clone, Default)]
pub struct ComplianceEngine {
    config: EngineConfig,
}

impl ComplianceEngine {
    /// Build an engine over `config` with its term lists normalized.
    /// Use [`ComplianceEngine::try_new`] to also reject empty or overlapping lists.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn try_new(config: EngineConfig) -> Result<Self, ConfigError> {
        let config = config.normalized();
        config.check()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run both keyword profiles and the terminology check over raw content.
    pub fn validate_lesson_content(
        &self,
        content: &str,
        grade_level: i64,
        subject: &str,
    ) -> StandardsComplianceReport {
        let normalized = NormalizedContent::new(content);
        let gdpt2018 =
            KeywordComplianceChecker::new(KeywordProfile::Gdpt2018, &self.config).check(&normalized);
        let cv5512 =
            KeywordComplianceChecker::new(KeywordProfile::Cv5512, &self.config).check(&normalized);
        let terminology = TerminologyAnalyzer::new(&self.config).check(&normalized);

        let report = aggregate_report(
            gdpt2018,
            cv5512,
            terminology,
            grade_level,
            Subject::from_name(subject),
        );
        debug!(
            length = normalized.len(),
            score = report.overall.score,
            grade = %report.overall.grade,
            "lesson content checked"
        );
        report
    }

    pub fn validate_lesson_plan(&self, input: &LessonPlanInput) -> EducationalValidationResult {
        let mut parts = vec![
            validate_subject(&input.subject),
            validate_grade_level(input.grade_level),
            validate_pedagogical_standard(&input.pedagogical_standard),
            validate_required_text(&input.lesson_name, "Tên bài học"),
        ];

        if let Some(content) = input
            .curriculum_content
            .as_deref()
            .filter(|c| c.chars().count() > LESSON_CONTENT_MIN_EXCLUSIVE)
        {
            let standard = PedagogicalStandard::from_name(&input.pedagogical_standard)
                .unwrap_or(PedagogicalStandard::Gdpt2018);
            parts.push(self.content_findings(content, input.grade_level, &input.subject, standard));
        }

        let result = combine(&parts);
        debug!(
            subject = %input.subject,
            grade_level = input.grade_level,
            valid = result.is_valid,
            score = result.compliance_score,
            "lesson plan validated"
        );
        result
    }

    pub fn validate_presentation(&self, input: &PresentationInput) -> EducationalValidationResult {
        let mut parts = vec![
            validate_subject(&input.subject),
            validate_grade_level(input.grade_level),
            validate_required_text(&input.lesson_name, "Tên bài học"),
            validate_slide_count(input.slide_count, input.grade_level),
        ];

        if let Some(content) = input
            .curriculum_content
            .as_deref()
            .filter(|c| c.chars().count() >= PRESENTATION_CONTENT_MIN_INCLUSIVE)
        {
            parts.push(self.content_findings(
                content,
                input.grade_level,
                &input.subject,
                PedagogicalStandard::Gdpt2018,
            ));
        }

        let result = combine(&parts);
        debug!(
            subject = %input.subject,
            grade_level = input.grade_level,
            slide_count = input.slide_count,
            valid = result.is_valid,
            score = result.compliance_score,
            "presentation validated"
        );
        result
    }

    pub fn validate_assessment(&self, input: &AssessmentInput) -> EducationalValidationResult {
        let mut parts = vec![
            validate_subject(&input.subject),
            validate_grade_level(input.grade_level),
            validate_required_text(&input.topic, "Chủ đề"),
            validate_question_count(input.question_count),
            validate_question_type(input.question_type, input.grade_level, input.question_count),
        ];

        if let Some(content) = input
            .curriculum_content
            .as_deref()
            .filter(|c| c.chars().count() > LESSON_CONTENT_MIN_EXCLUSIVE)
        {
            parts.push(self.content_findings(
                content,
                input.grade_level,
                &input.subject,
                PedagogicalStandard::Gdpt2018,
            ));
        }

        parts.push(validate_bloom_taxonomy(
            &input.bloom_levels,
            input.grade_level,
            input.question_count,
        ));

        let result = combine(&parts);
        debug!(
            subject = %input.subject,
            grade_level = input.grade_level,
            question_count = input.question_count,
            valid = result.is_valid,
            score = result.compliance_score,
            "assessment validated"
        );
        result
    }

    pub fn validate_request(&self, request: &ValidationRequest) -> EducationalValidationResult {
        match request {
            ValidationRequest::LessonPlan(input) => self.validate_lesson_plan(input),
            ValidationRequest::Presentation(input) => self.validate_presentation(input),
            ValidationRequest::Assessment(input) => self.validate_assessment(input),
        }
    }

    /// Content report folded into an envelope: warnings only, never errors.
    fn content_findings(
        &self,
        content: &str,
        grade_level: i64,
        subject: &str,
        standard: PedagogicalStandard,
    ) -> EducationalValidationResult {
        let report = self.validate_lesson_content(content, grade_level, subject);
        let mut result = EducationalValidationResult {
            compliance_score: report.overall.score,
            ..Default::default()
        };

        if report.overall.score < self.config.calibration.content_pass_score {
            result.push_warning(format!(
                "Nội dung chưa đạt chuẩn: điểm tổng hợp {}/100 (xếp loại {})",
                report.overall.score, report.overall.grade
            ));
        }

        match standard {
            PedagogicalStandard::Gdpt2018 if !report.gdpt2018.is_compliant => {
                result.push_warning(format!(
                    "Nội dung chưa đáp ứng Chương trình GDPT 2018, còn thiếu: {}",
                    report.gdpt2018.missing.join(", ")
                ));
            }
            PedagogicalStandard::Cv5512 if !report.cv5512.is_compliant => {
                result.push_warning(format!(
                    "Kế hoạch bài dạy chưa đủ cấu trúc theo CV 5512, còn thiếu: {}",
                    report.cv5512.missing.join(", ")
                ));
            }
            PedagogicalStandard::Gdpt2018 | PedagogicalStandard::Cv5512 => {}
        }

        if !result.warnings.is_empty() {
            for recommendation in report.overall.recommendations {
                result.push_suggestion(recommendation);
            }
        }

        result
    }
}

pub fn validate_lesson_content(
    content: &str,
    grade_level: i64,
    subject: &str,
) -> StandardsComplianceReport {
    STANDARD_ENGINE.validate_lesson_content(content, grade_level, subject)
}

pub fn validate_lesson_plan(input: &LessonPlanInput) -> EducationalValidationResult {
    STANDARD_ENGINE.validate_lesson_plan(input)
}

pub fn validate_presentation(input: &PresentationInput) -> EducationalValidationResult {
    STANDARD_ENGINE.validate_presentation(input)
}

pub fn validate_assessment(input: &AssessmentInput) -> EducationalValidationResult {
    STANDARD_ENGINE.validate_assessment(input)
}

pub fn validate_request(request: &ValidationRequest) -> EducationalValidationResult {
    STANDARD_ENGINE.validate_request(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG_PLAN: &str = "I. Mục tiêu: phát triển năng lực tự chủ, giao tiếp, hợp tác, \
        giải quyết vấn đề và sáng tạo; bồi dưỡng phẩm chất chăm chỉ theo yêu cầu cần đạt. \
        II. Thiết bị dạy học và học liệu. III. Tiến trình dạy học: hoạt động mở đầu, \
        hình thành kiến thức, luyện tập, vận dụng. Phương pháp dạy học: thảo luận nhóm, \
        dự án; đánh giá qua sản phẩm học tập.";

    fn lesson_plan(content: Option<&str>) -> LessonPlanInput {
        LessonPlanInput {
            subject: "Toán".into(),
            grade_level: 7,
            lesson_name: "Phân số".into(),
            pedagogical_standard: "CV 5512".into(),
            curriculum_content: content.map(String::from),
        }
    }

    #[test]
    fn clean_lesson_plan_without_content() {
        let result = validate_lesson_plan(&lesson_plan(None));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.compliance_score, 100);
    }

    #[test]
    fn short_content_is_not_checked() {
        let result = validate_lesson_plan(&lesson_plan(Some("Phân số 7")));
        assert!(result.warnings.is_empty());
        assert_eq!(result.compliance_score, 100);
    }

    #[test]
    fn strong_content_raises_no_warning() {
        let report = validate_lesson_content(STRONG_PLAN, 7, "Toán");
        assert!(report.gdpt2018.is_compliant);
        assert!(report.cv5512.is_compliant);
        assert!(report.overall.score >= 90);

        let result = validate_lesson_plan(&lesson_plan(Some(STRONG_PLAN)));
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn weak_content_folds_in_as_warnings() {
        let result =
            validate_lesson_plan(&lesson_plan(Some("Bài học về phân số và các phép tính.")));
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("chưa đạt chuẩn")));
        assert!(result.warnings.iter().any(|w| w.contains("CV 5512")));
        assert!(!result.suggestions.is_empty());
        assert!(result.compliance_score < 100);
    }

    #[test]
    fn invalid_fields_make_plan_invalid() {
        let mut input = lesson_plan(None);
        input.grade_level = 10;
        input.subject = "Hóa học".into();
        let result = validate_lesson_plan(&input);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn lesson_content_threshold_is_exclusive() {
        // exactly 10 characters is skipped, 11 is checked
        let ten = validate_lesson_plan(&lesson_plan(Some("abcdefghij")));
        assert!(ten.warnings.is_empty());
        assert_eq!(ten.compliance_score, 100);

        let eleven = validate_lesson_plan(&lesson_plan(Some("abcdefghijk")));
        assert!(eleven.is_valid);
        assert!(eleven.warnings.iter().any(|w| w.contains("chưa đạt chuẩn")));
        assert!(eleven.compliance_score < 100);
    }

    #[test]
    fn assessment_content_threshold_is_exclusive() {
        let assessment = |content: &str| AssessmentInput {
            subject: "Toán".into(),
            grade_level: 8,
            topic: "Phương trình".into(),
            question_count: 4,
            question_type: QuestionType::Mixed,
            bloom_levels: vec![BloomLevel::Application, BloomLevel::Analysis],
            curriculum_content: Some(content.into()),
        };
        assert!(validate_assessment(&assessment("abcdefghij")).warnings.is_empty());
        assert!(!validate_assessment(&assessment("abcdefghijk"))
            .warnings
            .is_empty());
    }

    #[test]
    fn presentation_threshold_is_inclusive() {
        let input = PresentationInput {
            subject: "Ngữ văn".into(),
            grade_level: 8,
            lesson_name: "Thơ Đường luật".into(),
            slide_count: 12,
            output_format: Some(OutputFormat::Pptx),
            curriculum_content: Some("abcdefghij".into()),
        };
        let result = validate_presentation(&input);
        assert!(result.is_valid);
        // exactly 10 characters is checked and scores poorly
        assert!(result.warnings.iter().any(|w| w.contains("GDPT 2018")));
    }

    #[test]
    fn assessment_runs_bloom_analysis() {
        let input = AssessmentInput {
            subject: "Khoa học tự nhiên".into(),
            grade_level: 6,
            topic: "Tế bào".into(),
            question_count: 10,
            question_type: QuestionType::Essay,
            bloom_levels: vec![BloomLevel::Analysis, BloomLevel::Evaluation],
            curriculum_content: None,
        };
        let result = validate_assessment(&input);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("tự luận")));
        assert!(result.warnings.iter().any(|w| w.contains("Quá nhiều")));
    }

    #[test]
    fn assessment_empty_bloom_is_invalid() {
        let input = AssessmentInput {
            subject: "Tin học".into(),
            grade_level: 9,
            topic: "Thuật toán".into(),
            question_count: 10,
            question_type: QuestionType::Mixed,
            bloom_levels: vec![],
            curriculum_content: None,
        };
        let result = validate_assessment(&input);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn request_dispatch_matches_direct_call() {
        let input = lesson_plan(Some("Bài học về phân số và các phép tính."));
        let direct = validate_lesson_plan(&input);
        let dispatched = validate_request(&ValidationRequest::LessonPlan(input));
        assert_eq!(direct, dispatched);
    }

    #[test]
    fn new_normalizes_mixed_case_terms() {
        let mut config = EngineConfig::default();
        config.reference.gdpt2018[0] = "  Năng Lực ".into();
        let engine = ComplianceEngine::new(config);
        assert_eq!(engine.config().reference.gdpt2018[0], "năng lực");

        let report = engine.validate_lesson_content("năng lực phẩm chất", 7, "Toán");
        assert!(!report.gdpt2018.missing.contains(&"năng lực".to_string()));
        assert_eq!(report.gdpt2018.missing.len(), 6);
    }

    #[test]
    fn try_new_rejects_empty_and_overlapping_lists() {
        let mut empty = EngineConfig::default();
        empty.reference.cv5512.clear();
        assert!(matches!(
            ComplianceEngine::try_new(empty),
            Err(ConfigError::EmptyList("cv5512"))
        ));

        let mut overlap = EngineConfig::default();
        overlap.reference.terminology.push("Năng lực".into());
        assert!(matches!(
            ComplianceEngine::try_new(overlap),
            Err(ConfigError::Overlap { .. })
        ));

        assert!(ComplianceEngine::try_new(EngineConfig::default()).is_ok());
    }

    #[test]
    fn custom_calibration_changes_tolerance() {
        let mut config = EngineConfig::default();
        config.calibration.content_pass_score = 0;
        config.calibration.cv_missing_tolerance = 8;
        let engine = ComplianceEngine::new(config);
        let result = engine.validate_lesson_plan(&lesson_plan(Some("Bài học về phân số.")));
        assert!(result.warnings.is_empty());
    }
}
