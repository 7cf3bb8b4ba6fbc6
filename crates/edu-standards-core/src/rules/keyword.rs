//! Keyword profile checks for GDPT 2018 and CV 5512.
//!
//! Both profiles test each reference keyword for case-insensitive presence.
//! They differ in tolerance and scoring:
//! - GDPT 2018: `0.8 * coverage + 0.2 * min(len / 100, 1)`
//! - CV 5512: `coverage + 0.1` when both structure markers are present, capped at 100

use tracing::trace;

use super::NormalizedContent;
use crate::aggregate::round_div;
use crate::catalogs::{CV_5512_STRUCTURE_MARKERS, CV_5512_SUGGESTIONS, GDPT_2018_SUGGESTIONS};
use crate::config::EngineConfig;
use crate::types::ComplianceResult;

/// Content length (in characters) that earns the full GDPT 2018 elaboration bonus.
const GDPT_FULL_LENGTH: usize = 100;
/// CV 5512 structure bonus, in score points.
const CV_STRUCTURE_BONUS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordProfile {
    Gdpt2018,
    Cv5512,
}

impl KeywordProfile {
    pub fn id(self) -> &'static str {
        match self {
            KeywordProfile::Gdpt2018 => "gdpt2018",
            KeywordProfile::Cv5512 => "cv5512",
        }
    }

    fn suggestion_for(self, keyword: &str) -> Option<&'static str> {
        let table = match self {
            KeywordProfile::Gdpt2018 => GDPT_2018_SUGGESTIONS,
            KeywordProfile::Cv5512 => CV_5512_SUGGESTIONS,
        };
        table
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, suggestion)| *suggestion)
    }
}

pub struct KeywordComplianceChecker<'a> {
    profile: KeywordProfile,
    keywords: &'a [String],
    tolerance: usize,
}

impl<'a> KeywordComplianceChecker<'a> {
    pub fn new(profile: KeywordProfile, config: &'a EngineConfig) -> Self {
        let (keywords, tolerance) = match profile {
            KeywordProfile::Gdpt2018 => (
                config.reference.gdpt2018.as_slice(),
                config.calibration.gdpt_missing_tolerance,
            ),
            KeywordProfile::Cv5512 => (
                config.reference.cv5512.as_slice(),
                config.calibration.cv_missing_tolerance,
            ),
        };
        Self {
            profile,
            keywords,
            tolerance,
        }
    }

    pub fn profile(&self) -> KeywordProfile {
        self.profile
    }

    pub fn check(&self, content: &NormalizedContent) -> ComplianceResult {
        let missing: Vec<String> = self
            .keywords
            .iter()
            .filter(|k| !content.contains(k))
            .cloned()
            .collect();

        let total = self.keywords.len() as u64;
        let covered = total - missing.len() as u64;

        let score = if total == 0 {
            0
        } else {
            match self.profile {
                KeywordProfile::Gdpt2018 => {
                    // 80 * covered / total + 20 * min(len, 100) / 100, over a common denominator
                    let length = content.len().min(GDPT_FULL_LENGTH) as u64;
                    round_div(400 * covered + length * total, 5 * total)
                }
                KeywordProfile::Cv5512 => {
                    let bonus = if CV_5512_STRUCTURE_MARKERS
                        .iter()
                        .all(|m| content.contains(m))
                    {
                        CV_STRUCTURE_BONUS
                    } else {
                        0
                    };
                    (round_div(100 * covered, total) + bonus).min(100)
                }
            }
        };

        let suggestions: Vec<String> = missing
            .iter()
            .filter_map(|k| self.profile.suggestion_for(k))
            .map(String::from)
            .collect();

        trace!(
            profile = self.profile.id(),
            covered,
            missing = missing.len(),
            score,
            "keyword profile checked"
        );

        ComplianceResult {
            is_compliant: total > 0 && missing.len() <= self.tolerance,
            score,
            missing,
            suggestions,
        }
    }
}
