//! Bloom's Taxonomy distribution analysis for assessments.
//!
//! Only an empty selection is an error. Everything else is advisory and
//! conditioned on grade band and question count.

use std::collections::BTreeMap;

use tracing::trace;

use crate::types::*;

/// Imbalance check applies from this many questions upward.
const BALANCE_MIN_QUESTIONS: i64 = 10;
/// `max / min` occurrence ratio above which the distribution is unbalanced.
const MAX_BALANCE_RATIO: usize = 3;
/// Grade 8+ without application questions is flagged above this many questions.
const APPLICATION_MIN_QUESTIONS: i64 = 5;

const BASE_SCORE: u32 = 50;
const CONDITION_SCORE: u32 = 25;

/// Levels may repeat; repeats count toward the balance histogram only.
/// The grade 6-7 overload check counts distinct higher-order levels, so
/// `[Analysis, Analysis]` is one higher-order level.
pub fn validate_bloom_taxonomy(
    levels: &[BloomLevel],
    grade_level: i64,
    question_count: i64,
) -> EducationalValidationResult {
    let mut result = EducationalValidationResult::default();

    if levels.is_empty() {
        result.push_error("Cần chọn ít nhất một mức độ nhận thức theo thang Bloom");
        result.compliance_score = 0;
        return result;
    }

    let has_tier = |tier: BloomTier| levels.iter().any(|l| l.tier() == tier);
    let has_lower = has_tier(BloomTier::Lower);
    let has_middle = has_tier(BloomTier::Middle);
    let has_higher = has_tier(BloomTier::Higher);

    let mut distinct: Vec<BloomLevel> = levels.to_vec();
    distinct.sort();
    distinct.dedup();
    let distinct_higher = distinct
        .iter()
        .filter(|l| l.tier() == BloomTier::Higher)
        .count();

    let (presence, complement) = if grade_level <= 7 {
        if !has_lower {
            result.push_warning(
                "Nên có câu hỏi mức Nhận biết hoặc Thông hiểu cho học sinh lớp 6-7",
            );
            result.push_suggestion(
                "Bổ sung câu hỏi Nhận biết, Thông hiểu để học sinh nắm vững kiến thức nền tảng",
            );
        }
        if distinct_higher > 1 {
            result.push_warning(
                "Quá nhiều mức tư duy bậc cao (Phân tích, Tổng hợp, Đánh giá) có thể vượt quá khả năng của học sinh lớp 6-7",
            );
            result.push_suggestion("Chỉ nên giữ tối đa một mức tư duy bậc cao cho học sinh lớp 6-7");
        }
        (has_lower, distinct_higher <= 1)
    } else {
        if !has_higher {
            result.push_warning(
                "Nên có câu hỏi tư duy bậc cao (Phân tích, Tổng hợp, Đánh giá) cho học sinh lớp 8-9",
            );
            result.push_suggestion(
                "Bổ sung câu hỏi Phân tích hoặc Đánh giá để phát triển tư duy phản biện",
            );
        }
        if !has_middle && question_count > APPLICATION_MIN_QUESTIONS {
            result.push_warning("Đề kiểm tra nhiều câu hỏi nhưng thiếu mức Vận dụng");
            result.push_suggestion(
                "Bổ sung câu hỏi Vận dụng để học sinh áp dụng kiến thức vào tình huống cụ thể",
            );
        }
        (has_higher, has_lower)
    };

    if question_count >= BALANCE_MIN_QUESTIONS {
        if let Some((max, min)) = occurrence_spread(levels) {
            if max > MAX_BALANCE_RATIO * min {
                result.push_warning(format!(
                    "Phân bố mức độ nhận thức chưa cân đối (chênh lệch {max}:{min})"
                ));
                result.push_suggestion("Điều chỉnh số câu hỏi giữa các mức độ cho cân đối hơn");
            }
        }
    }

    result.compliance_score = BASE_SCORE
        + if presence { CONDITION_SCORE } else { 0 }
        + if complement { CONDITION_SCORE } else { 0 };

    trace!(
        grade_level,
        question_count,
        distinct = distinct.len(),
        score = result.compliance_score,
        "bloom distribution analyzed"
    );

    result
}

/// Largest and smallest per-level occurrence counts, or `None` when fewer
/// than two distinct levels are selected.
fn occurrence_spread(levels: &[BloomLevel]) -> Option<(usize, usize)> {
    let mut histogram: BTreeMap<BloomLevel, usize> = BTreeMap::new();
    for level in levels {
        *histogram.entry(*level).or_insert(0) += 1;
    }
    if histogram.len() < 2 {
        return None;
    }
    let max = histogram.values().copied().max()?;
    let min = histogram.values().copied().min()?;
    Some((max, min))
}
