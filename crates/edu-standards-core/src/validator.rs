//! Structural field validators.
//!
//! Each check is independent and returns its own envelope. Out-of-domain
//! values are errors; advisory findings are warnings with suggestions.

use crate::types::*;

/// Supported lower-secondary grades.
pub const GRADE_LEVELS: [i64; 4] = [6, 7, 8, 9];

pub const MIN_SLIDES: i64 = 3;
pub const MAX_SLIDES: i64 = 20;
/// Grades 6-7 get a length warning above this many slides.
const YOUNGER_SLIDE_SOFT_LIMIT: i64 = 15;

pub const MIN_QUESTIONS: i64 = 1;
pub const MAX_QUESTIONS: i64 = 50;
const YOUNGER_ESSAY_SOFT_LIMIT: i64 = 3;
const MULTIPLE_CHOICE_SOFT_LIMIT: i64 = 30;

/// Score for a field envelope: 0 with errors, 80 with warnings only, 100 when clean.
fn settle(mut result: EducationalValidationResult) -> EducationalValidationResult {
    result.is_valid = result.errors.is_empty();
    result.compliance_score = if !result.errors.is_empty() {
        0
    } else if !result.warnings.is_empty() {
        80
    } else {
        100
    };
    result
}

pub fn validate_grade_level(grade_level: i64) -> EducationalValidationResult {
    let mut result = EducationalValidationResult::default();
    if !GRADE_LEVELS.contains(&grade_level) {
        result.push_error(format!(
            "Khối lớp {grade_level} không hợp lệ: chỉ hỗ trợ từ lớp 6 đến 9"
        ));
    }
    settle(result)
}

pub fn validate_subject(subject: &str) -> EducationalValidationResult {
    let mut result = EducationalValidationResult::default();
    if subject.trim().is_empty() {
        result.push_error("Môn học không được để trống");
    } else if Subject::from_name(subject).is_none() {
        result.push_error(format!(
            "Môn học \"{}\" không thuộc danh mục môn học THCS",
            subject.trim()
        ));
        let names: Vec<&str> = Subject::ALL.iter().map(|s| s.name()).collect();
        result.push_suggestion(format!("Chọn một trong các môn: {}", names.join("; ")));
    }
    settle(result)
}

pub fn validate_pedagogical_standard(standard: &str) -> EducationalValidationResult {
    let mut result = EducationalValidationResult::default();
    if standard.trim().is_empty() {
        result.push_error("Chuẩn sư phạm không được để trống");
    } else if PedagogicalStandard::from_name(standard).is_none() {
        result.push_error(format!(
            "Chuẩn sư phạm \"{}\" không được hỗ trợ (chỉ hỗ trợ GDPT 2018 và CV 5512)",
            standard.trim()
        ));
    }
    settle(result)
}

/// Non-blank free-text field such as a lesson name or assessment topic.
pub fn validate_required_text(value: &str, label: &str) -> EducationalValidationResult {
    let mut result = EducationalValidationResult::default();
    if value.trim().is_empty() {
        result.push_error(format!("{label} không được để trống"));
    }
    settle(result)
}

pub fn validate_slide_count(slide_count: i64, grade_level: i64) -> EducationalValidationResult {
    let mut result = EducationalValidationResult::default();

    if slide_count < MIN_SLIDES {
        result.push_error(format!(
            "Số lượng slide quá ít (tối thiểu {MIN_SLIDES}), không đủ để truyền tải nội dung bài học"
        ));
    } else if slide_count > MAX_SLIDES {
        result.push_error(format!(
            "Số lượng slide quá nhiều (tối đa {MAX_SLIDES}), dễ gây mệt mỏi cho học sinh"
        ));
    }

    if grade_level <= 7 && slide_count > YOUNGER_SLIDE_SOFT_LIMIT {
        result.push_warning(format!(
            "{slide_count} slide là khá dài đối với học sinh lớp {grade_level}"
        ));
        result.push_suggestion("Nên giảm xuống khoảng 10-12 slide cho học sinh lớp 6-7");
    }

    settle(result)
}

pub fn validate_question_count(question_count: i64) -> EducationalValidationResult {
    let mut result = EducationalValidationResult::default();
    if question_count < MIN_QUESTIONS {
        result.push_error("Số lượng câu hỏi phải lớn hơn 0");
    } else if question_count > MAX_QUESTIONS {
        result.push_error(format!(
            "Số lượng câu hỏi quá nhiều (tối đa {MAX_QUESTIONS})"
        ));
    }
    settle(result)
}

/// Advisory only: never produces errors.
pub fn validate_question_type(
    question_type: QuestionType,
    grade_level: i64,
    question_count: i64,
) -> EducationalValidationResult {
    let mut result = EducationalValidationResult::default();

    match question_type {
        QuestionType::Essay
            if grade_level <= 7 && question_count > YOUNGER_ESSAY_SOFT_LIMIT =>
        {
            result.push_warning(format!(
                "{question_count} câu tự luận có thể quá tải với học sinh lớp {grade_level}"
            ));
            result.push_suggestion(
                "Giảm số câu tự luận xuống tối đa 3 hoặc chuyển sang dạng hỗn hợp",
            );
        }
        QuestionType::MultipleChoice if question_count > MULTIPLE_CHOICE_SOFT_LIMIT => {
            result.push_warning(format!(
                "{question_count} câu trắc nghiệm dễ dẫn đến đánh giá hời hợt"
            ));
            result.push_suggestion("Kết hợp thêm câu hỏi tự luận ngắn để đánh giá sâu hơn");
        }
        QuestionType::Essay | QuestionType::MultipleChoice | QuestionType::Mixed => {}
    }

    settle(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_level_accepts_six_to_nine() {
        for grade in 6..=9 {
            let result = validate_grade_level(grade);
            assert!(result.is_valid);
            assert_eq!(result.compliance_score, 100);
        }
    }

    #[test]
    fn grade_level_rejects_out_of_range() {
        for grade in [-1, 0, 5, 10, 12] {
            let result = validate_grade_level(grade);
            assert!(!result.is_valid);
            assert_eq!(result.compliance_score, 0);
            assert!(result.errors[0].contains("6 đến 9"));
        }
    }

    #[test]
    fn subject_known_case_insensitive() {
        assert!(validate_subject("Toán").is_valid);
        assert!(validate_subject("  khoa học tự nhiên ").is_valid);
    }

    #[test]
    fn subject_empty_and_unknown() {
        let empty = validate_subject("   ");
        assert!(!empty.is_valid);
        assert_eq!(empty.errors, vec!["Môn học không được để trống"]);

        let unknown = validate_subject("Hóa học");
        assert!(!unknown.is_valid);
        assert!(unknown.errors[0].contains("Hóa học"));
        assert!(unknown.suggestions[0].contains("Ngữ văn"));
    }

    #[test]
    fn pedagogical_standard() {
        assert!(validate_pedagogical_standard("GDPT 2018").is_valid);
        assert!(validate_pedagogical_standard("CV 5512").is_valid);
        assert!(!validate_pedagogical_standard("").is_valid);
        let unknown = validate_pedagogical_standard("CV 4040");
        assert!(!unknown.is_valid);
        assert!(unknown.errors[0].contains("CV 4040"));
    }

    #[test]
    fn required_text() {
        assert!(validate_required_text("Phân số", "Tên bài học").is_valid);
        let blank = validate_required_text(" ", "Tên bài học");
        assert_eq!(blank.errors, vec!["Tên bài học không được để trống"]);
    }

    #[test]
    fn slide_count_bounds() {
        assert!(validate_slide_count(3, 8).is_valid);
        assert!(validate_slide_count(20, 8).is_valid);

        let few = validate_slide_count(2, 8);
        assert!(!few.is_valid);
        assert!(few.errors[0].contains("quá ít"));

        let many = validate_slide_count(25, 8);
        assert!(!many.is_valid);
        assert!(many.errors[0].contains("quá nhiều"));
        assert!(many.warnings.is_empty());
    }

    #[test]
    fn slide_count_younger_grade_warning() {
        let result = validate_slide_count(16, 6);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.suggestions[0].contains("10-12"));
        assert_eq!(result.compliance_score, 80);

        assert!(validate_slide_count(15, 7).warnings.is_empty());
        assert!(validate_slide_count(18, 8).warnings.is_empty());
    }

    #[test]
    fn question_count_bounds() {
        assert!(validate_question_count(1).is_valid);
        assert!(validate_question_count(50).is_valid);
        assert!(!validate_question_count(0).is_valid);
        assert!(!validate_question_count(51).is_valid);
    }

    #[test]
    fn essay_overload_for_younger_grades() {
        let result = validate_question_type(QuestionType::Essay, 7, 4);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);

        assert!(validate_question_type(QuestionType::Essay, 7, 3)
            .warnings
            .is_empty());
        assert!(validate_question_type(QuestionType::Essay, 8, 10)
            .warnings
            .is_empty());
    }

    #[test]
    fn multiple_choice_overload() {
        let result = validate_question_type(QuestionType::MultipleChoice, 9, 31);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(validate_question_type(QuestionType::MultipleChoice, 9, 30)
            .warnings
            .is_empty());
        assert!(validate_question_type(QuestionType::Mixed, 6, 45)
            .warnings
            .is_empty());
    }
}
