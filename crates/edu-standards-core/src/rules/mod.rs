//! Content checkers: keyword profiles and pedagogical terminology.

pub mod keyword;
pub mod terminology;

pub use keyword::{KeywordComplianceChecker, KeywordProfile};
pub use terminology::TerminologyAnalyzer;

/// Content prepared once for every checker: lowercased text plus its length
/// in Unicode scalar values.
#[derive(Debug, Clone)]
pub struct NormalizedContent {
    lower: String,
    len: usize,
}

impl NormalizedContent {
    pub fn new(content: &str) -> Self {
        Self {
            lower: content.to_lowercase(),
            len: content.chars().count(),
        }
    }

    /// Case-insensitive substring test. `term` must already be lowercase.
    pub fn contains(&self, term: &str) -> bool {
        self.lower.contains(term)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
