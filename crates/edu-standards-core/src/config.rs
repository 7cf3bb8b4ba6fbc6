//! Engine configuration: reference keyword lists and heuristic calibration.
//!
//! Every field defaults to the built-in catalogs, so an empty YAML document
//! yields the standard engine. Overrides exist for localization and for
//! product owners revisiting the calibration constants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalogs::{CV_5512_COMPONENTS, GDPT_2018_KEYWORDS, PEDAGOGICAL_TERMS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reference list \"{0}\" must not be empty")]
    EmptyList(&'static str),

    #[error("term \"{term}\" appears in both \"{first}\" and \"{second}\" reference lists")]
    Overlap {
        term: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The three reference lists. Must be pairwise disjoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSets {
    pub gdpt2018: Vec<String>,
    pub cv5512: Vec<String>,
    pub terminology: Vec<String>,
}

impl Default for ReferenceSets {
    fn default() -> Self {
        let owned =
            |terms: &[&str]| -> Vec<String> { terms.iter().map(|t| t.to_string()).collect() };
        Self {
            gdpt2018: owned(GDPT_2018_KEYWORDS),
            cv5512: owned(CV_5512_COMPONENTS),
            terminology: owned(PEDAGOGICAL_TERMS),
        }
    }
}

/// Heuristic thresholds. The defaults are behavioral calibration, not derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Calibration {
    /// Missing GDPT 2018 keywords tolerated before content is non-compliant.
    pub gdpt_missing_tolerance: usize,
    /// Missing CV 5512 components tolerated before content is non-compliant.
    pub cv_missing_tolerance: usize,
    /// Pedagogical terms required for the terminology check to pass.
    pub terminology_min_terms: usize,
    /// Overall content score below which the orchestrator raises a warning.
    pub content_pass_score: u32,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            gdpt_missing_tolerance: 2,
            cv_missing_tolerance: 3,
            terminology_min_terms: 3,
            content_pass_score: 60,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub reference: ReferenceSets,
    pub calibration: Calibration,
}

impl EngineConfig {
    /// Parse a YAML document, normalize the lists, and check them.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = if yaml.trim().is_empty() {
            EngineConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        let config = config.normalized();
        config.check()?;
        Ok(config)
    }

    /// Lowercase and trim every term, dropping blanks and duplicates within a list.
    pub fn normalized(mut self) -> Self {
        for list in [
            &mut self.reference.gdpt2018,
            &mut self.reference.cv5512,
            &mut self.reference.terminology,
        ] {
            let mut seen = Vec::with_capacity(list.len());
            for term in list.drain(..) {
                let term = term.trim().to_lowercase();
                if !term.is_empty() && !seen.contains(&term) {
                    seen.push(term);
                }
            }
            *list = seen;
        }
        self
    }

    /// Reject empty or overlapping reference lists.
    pub fn check(&self) -> Result<(), ConfigError> {
        let lists: [(&'static str, &Vec<String>); 3] = [
            ("gdpt2018", &self.reference.gdpt2018),
            ("cv5512", &self.reference.cv5512),
            ("terminology", &self.reference.terminology),
        ];

        for (name, list) in &lists {
            if list.is_empty() {
                return Err(ConfigError::EmptyList(*name));
            }
        }

        for (i, (first, a)) in lists.iter().enumerate() {
            for (second, b) in &lists[i + 1..] {
                if let Some(term) = a.iter().find(|t| b.contains(t)) {
                    return Err(ConfigError::Overlap {
                        term: term.clone(),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_are_disjoint_and_sized() {
        let config = EngineConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.reference.gdpt2018.len(), 8);
        assert_eq!(config.reference.cv5512.len(), 8);
        assert_eq!(config.reference.terminology.len(), 12);
    }

    #[test]
    fn empty_yaml_is_default() {
        let config = EngineConfig::from_yaml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "calibration:\n  gdptMissingTolerance: 1\n";
        let config = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.calibration.gdpt_missing_tolerance, 1);
        assert_eq!(config.calibration.cv_missing_tolerance, 3);
        assert_eq!(config.reference, ReferenceSets::default());
    }

    #[test]
    fn overrides_are_normalized() {
        let yaml = "reference:\n  terminology: [\"  Đánh Giá \", \"đánh giá\", \"\", \"Dự án\"]\n";
        let config = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.reference.terminology, vec!["đánh giá", "dự án"]);
    }

    #[test]
    fn overlapping_lists_rejected() {
        let yaml = "reference:\n  terminology: [\"năng lực\"]\n";
        let err = EngineConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Overlap { .. }));
        assert!(err.to_string().contains("năng lực"));
    }

    #[test]
    fn empty_list_rejected() {
        let yaml = "reference:\n  cv5512: []\n";
        let err = EngineConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyList("cv5512")));
    }

    #[test]
    fn malformed_yaml_rejected() {
        let err = EngineConfig::from_yaml_str("calibration: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
