use edu_standards_core::types::*;
use pretty_assertions::assert_eq;

#[test]
fn envelope_json_keys() {
    let result = EducationalValidationResult {
        is_valid: false,
        errors: vec!["e".into()],
        warnings: vec![],
        suggestions: vec![],
        compliance_score: 0,
    };

    let json = serde_json::to_value(&result).unwrap();
    let obj = json.as_object().unwrap();

    assert!(obj.contains_key("isValid"));
    assert!(obj.contains_key("errors"));
    assert!(obj.contains_key("warnings"));
    assert!(obj.contains_key("suggestions"));
    assert!(obj.contains_key("complianceScore"));
    assert_eq!(obj.len(), 5);
    assert_eq!(json["isValid"], false);
}

#[test]
fn report_json_keys() {
    let section = ComplianceResult {
        is_compliant: true,
        score: 90,
        missing: vec![],
        suggestions: vec![],
    };
    let report = StandardsComplianceReport {
        gdpt2018: section.clone(),
        cv5512: section,
        terminology: TerminologyResult {
            is_valid: true,
            score: 100,
            found_terms: vec!["đánh giá".into()],
            suggestions: vec![],
        },
        overall: OverallAssessment {
            score: 93,
            grade: LetterGrade::A,
            recommendations: vec![],
        },
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["gdpt2018"]["isCompliant"], true);
    assert_eq!(json["cv5512"]["score"], 90);
    assert_eq!(json["terminology"]["foundTerms"][0], "đánh giá");
    assert_eq!(json["overall"]["grade"], "A");
    assert_eq!(json["overall"]["score"], 93);
}

#[test]
fn enums_use_wire_names() {
    assert_eq!(
        serde_json::to_value(BloomLevel::Comprehension).unwrap(),
        "comprehension"
    );
    assert_eq!(
        serde_json::to_value(QuestionType::MultipleChoice).unwrap(),
        "multiple-choice"
    );
    assert_eq!(
        serde_json::to_value(OutputFormat::GoogleSlides).unwrap(),
        "google-slides"
    );
    assert_eq!(
        serde_json::to_value(PedagogicalStandard::Cv5512).unwrap(),
        "CV 5512"
    );
    assert_eq!(
        serde_json::to_value(Subject::NaturalScience).unwrap(),
        "Khoa học tự nhiên"
    );
}

#[test]
fn subject_names_round_trip_through_lookup() {
    for subject in Subject::ALL {
        assert_eq!(Subject::from_name(subject.name()), Some(subject));
        let wire = serde_json::to_value(subject).unwrap();
        assert_eq!(wire, subject.name());
    }
    assert_eq!(Subject::from_name("TOÁN"), Some(Subject::Mathematics));
    assert_eq!(Subject::from_name(""), None);
}

#[test]
fn lesson_plan_input_from_json() {
    let json = r#"{
        "subject": "Toán",
        "gradeLevel": 6,
        "lessonName": "Số nguyên",
        "pedagogicalStandard": "GDPT 2018"
    }"#;
    let input: LessonPlanInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.grade_level, 6);
    assert_eq!(input.curriculum_content, None);
}

#[test]
fn tagged_request_from_json() {
    let json = r#"{
        "kind": "assessment",
        "subject": "Tin học",
        "gradeLevel": 9,
        "topic": "Thuật toán sắp xếp",
        "questionCount": 20,
        "questionType": "mixed",
        "bloomLevels": ["recognition", "application", "analysis"]
    }"#;
    let request: ValidationRequest = serde_json::from_str(json).unwrap();
    match request {
        ValidationRequest::Assessment(input) => {
            assert_eq!(input.question_count, 20);
            assert_eq!(input.question_type, QuestionType::Mixed);
            assert_eq!(
                input.bloom_levels,
                vec![
                    BloomLevel::Recognition,
                    BloomLevel::Application,
                    BloomLevel::Analysis
                ]
            );
        }
        other => panic!("expected assessment, got {other:?}"),
    }
}

#[test]
fn unknown_bloom_level_is_rejected_at_the_boundary() {
    let json = r#"{"kind": "assessment", "subject": "Toán", "gradeLevel": 6, "topic": "x",
        "questionCount": 5, "questionType": "essay", "bloomLevels": ["memorize"]}"#;
    assert!(serde_json::from_str::<ValidationRequest>(json).is_err());
}
