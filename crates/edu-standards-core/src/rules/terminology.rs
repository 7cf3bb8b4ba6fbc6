//! Pedagogical vocabulary check.
//!
//! Using about 30% of the vocabulary list earns the full score.

use tracing::trace;

use super::NormalizedContent;
use crate::aggregate::round_div;
use crate::catalogs::TERMINOLOGY_SUGGESTIONS;
use crate::config::EngineConfig;
use crate::types::TerminologyResult;

pub struct TerminologyAnalyzer<'a> {
    terms: &'a [String],
    min_terms: usize,
}

impl<'a> TerminologyAnalyzer<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            terms: &config.reference.terminology,
            min_terms: config.calibration.terminology_min_terms,
        }
    }

    /// Number of found terms that maxes the score: `ceil(|T| * 0.3)`.
    pub fn saturation(&self) -> usize {
        (self.terms.len() * 3).div_ceil(10)
    }

    pub fn check(&self, content: &NormalizedContent) -> TerminologyResult {
        let found_terms: Vec<String> = self
            .terms
            .iter()
            .filter(|t| content.contains(t))
            .cloned()
            .collect();

        let saturation = self.saturation() as u64;
        let score = if saturation == 0 {
            100
        } else {
            let found = (found_terms.len() as u64).min(saturation);
            round_div(100 * found, saturation)
        };

        let is_valid = found_terms.len() >= self.min_terms;
        let suggestions = if is_valid {
            Vec::new()
        } else {
            TERMINOLOGY_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
        };

        trace!(found = found_terms.len(), score, "terminology checked");

        TerminologyResult {
            is_valid,
            score,
            found_terms,
            suggestions,
        }
    }
}
