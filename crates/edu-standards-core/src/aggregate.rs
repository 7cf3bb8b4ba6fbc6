//! Score aggregation, letter grading, recommendations, and envelope combination.

use crate::catalogs::{
    HUMANITIES_TIPS, OLDER_GRADE_TIPS, OTHER_SUBJECT_TIPS, STEM_TIPS, YOUNGER_GRADE_TIPS,
};
use crate::types::*;

/// Upper bound on `overall.recommendations`.
pub const MAX_RECOMMENDATIONS: usize = 6;
/// Suggestions taken from each keyword profile when building recommendations.
const SUGGESTIONS_PER_STANDARD: usize = 2;

/// `num / den` rounded half up. `den` must be non-zero.
pub(crate) fn round_div(num: u64, den: u64) -> u32 {
    ((2 * num + den) / (2 * den)) as u32
}

/// Letter grade by inclusive lower bound.
pub fn classify_grade(score: u32) -> LetterGrade {
    if score >= 90 {
        LetterGrade::A
    } else if score >= 80 {
        LetterGrade::B
    } else if score >= 70 {
        LetterGrade::C
    } else if score >= 60 {
        LetterGrade::D
    } else {
        LetterGrade::F
    }
}

/// Ordered recommendations: grade-band tips, subject tips, then up to two
/// suggestions from each keyword profile. Deduplicated, truncated to six.
pub fn build_recommendations(
    grade_level: i64,
    subject: Option<Subject>,
    gdpt2018: &ComplianceResult,
    cv5512: &ComplianceResult,
) -> Vec<String> {
    let grade_tips: &[&str] = if grade_level <= 7 {
        &YOUNGER_GRADE_TIPS
    } else {
        &OLDER_GRADE_TIPS
    };

    let subject_tips: &[&str] = match subject.map(Subject::category) {
        Some(SubjectCategory::Stem) => &STEM_TIPS,
        Some(SubjectCategory::Humanities) => &HUMANITIES_TIPS,
        Some(SubjectCategory::Other) => &OTHER_SUBJECT_TIPS,
        None => &[],
    };

    let candidates = grade_tips
        .iter()
        .chain(subject_tips)
        .map(|s| s.to_string())
        .chain(
            gdpt2018
                .suggestions
                .iter()
                .take(SUGGESTIONS_PER_STANDARD)
                .cloned(),
        )
        .chain(
            cv5512
                .suggestions
                .iter()
                .take(SUGGESTIONS_PER_STANDARD)
                .cloned(),
        );

    let mut recommendations = Vec::new();
    for item in candidates {
        push_unique(&mut recommendations, item);
        if recommendations.len() == MAX_RECOMMENDATIONS {
            break;
        }
    }
    recommendations
}

/// Merge the three checker results into a full report.
pub fn aggregate_report(
    gdpt2018: ComplianceResult,
    cv5512: ComplianceResult,
    terminology: TerminologyResult,
    grade_level: i64,
    subject: Option<Subject>,
) -> StandardsComplianceReport {
    let sum = (gdpt2018.score + cv5512.score + terminology.score) as u64;
    let score = round_div(sum, 3).min(100);
    let recommendations = build_recommendations(grade_level, subject, &gdpt2018, &cv5512);

    StandardsComplianceReport {
        gdpt2018,
        cv5512,
        terminology,
        overall: OverallAssessment {
            score,
            grade: classify_grade(score),
            recommendations,
        },
    }
}

/// Reduce partial envelopes into one.
///
/// Message lists are unioned in first-seen order, `is_valid` is true iff no
/// errors survive, and `compliance_score` is the rounded mean. An empty slice
/// yields the default (valid, score 100).
pub fn combine(results: &[EducationalValidationResult]) -> EducationalValidationResult {
    if results.is_empty() {
        return EducationalValidationResult::default();
    }

    let mut combined = EducationalValidationResult::default();
    let mut total: u64 = 0;

    for result in results {
        for e in &result.errors {
            push_unique(&mut combined.errors, e.clone());
        }
        for w in &result.warnings {
            push_unique(&mut combined.warnings, w.clone());
        }
        for s in &result.suggestions {
            push_unique(&mut combined.suggestions, s.clone());
        }
        total += result.compliance_score.min(100) as u64;
    }

    combined.is_valid = combined.errors.is_empty();
    combined.compliance_score = round_div(total, results.len() as u64);
    combined
}
