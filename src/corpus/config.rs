//! Seed data for corpus synthesis.
//!
//! The category list, the seed phrases for each category and the trailing
//! context phrases are configuration, not logic. [`CorpusConfig::default`]
//! carries the documented eight-category symptom table; deployments with a
//! different category set load their own table from JSON.

use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::corpus::types::Category;
use crate::error::{Result, SymptomError};

/// Canonical phrases expressing one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeeds {
    /// The category these phrases express.
    pub category: Category,
    /// Ordered, non-empty list of phrases.
    pub phrases: Vec<String>,
}

/// Immutable seed table plus context phrase list.
///
/// Category order is significant: it becomes the class order of the trained
/// model and therefore the tie-breaking order at inference time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Seed phrases per category, in class order.
    pub categories: Vec<CategorySeeds>,
    /// Short trailing clauses that may extend any example.
    pub context_phrases: Vec<String>,
}

const DEFAULT_SEEDS: &[(&str, &[&str])] = &[
    (
        "FEVER",
        &[
            "i have fever",
            "high temperature",
            "feeling hot and chills",
            "temperature is high",
            "fever with body heat",
            "i feel feverish",
            "chills and fever",
        ],
    ),
    (
        "COLD",
        &[
            "runny nose",
            "sneezing a lot",
            "blocked nose",
            "nasal congestion",
            "cold and sneezing",
            "my nose is running",
            "nose blocked",
        ],
    ),
    (
        "COUGH",
        &[
            "i am coughing",
            "dry cough",
            "cough with phlegm",
            "continuous cough",
            "coughing fits",
            "bad cough",
        ],
    ),
    (
        "SORE_THROAT",
        &[
            "throat pain",
            "sore throat",
            "pain while swallowing",
            "itchy throat",
            "throat irritation",
            "throat burning",
        ],
    ),
    (
        "HEADACHE",
        &[
            "headache",
            "head pain",
            "migraine",
            "my head hurts",
            "pain in head",
            "head heavy",
            "head paining",
        ],
    ),
    (
        "STOMACH_PAIN",
        &[
            "stomach pain",
            "abdominal pain",
            "nausea and vomiting",
            "gas and stomach ache",
            "pain in belly",
            "loose motion and stomach pain",
            "stomach burning",
        ],
    ),
    (
        "BODY_PAIN",
        &[
            "body pain",
            "body ache",
            "muscle pain",
            "joint pain",
            "my body is aching",
            "leg pain",
        ],
    ),
    (
        "TIREDNESS",
        &[
            "i feel tired",
            "fatigue and weakness",
            "very weak",
            "low energy",
            "tiredness whole day",
            "feeling exhausted",
        ],
    ),
];

const DEFAULT_CONTEXT_PHRASES: &[&str] = &[
    "since morning",
    "from yesterday",
    "for two days",
    "after travelling",
    "after eating",
    "at night",
    "with slight chills",
    "and feeling weak",
    "and i cannot sleep",
    "and i feel stressed",
];

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_SEEDS
                .iter()
                .map(|(category, phrases)| CategorySeeds {
                    category: Category::new(*category),
                    phrases: phrases.iter().map(|p| p.to_string()).collect(),
                })
                .collect(),
            context_phrases: DEFAULT_CONTEXT_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl CorpusConfig {
    /// Create a validated corpus configuration.
    pub fn new(categories: Vec<CategorySeeds>, context_phrases: Vec<String>) -> Result<Self> {
        let config = Self {
            categories,
            context_phrases,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a corpus configuration from a JSON file and validate it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CorpusConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the table can drive synthesis and training.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(SymptomError::invalid_config("category set is empty"));
        }

        let mut seen = AHashSet::new();
        for seeds in &self.categories {
            if !seen.insert(&seeds.category) {
                return Err(SymptomError::invalid_config(format!(
                    "duplicate category: {}",
                    seeds.category
                )));
            }
            if seeds.phrases.is_empty() {
                return Err(SymptomError::invalid_config(format!(
                    "category {} has no seed phrases",
                    seeds.category
                )));
            }
        }

        Ok(())
    }

    /// Categories in class order.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.iter().map(|s| s.category.clone()).collect()
    }

    /// Seed phrases for `category`, if it is configured.
    pub fn phrases(&self, category: &Category) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|s| &s.category == category)
            .map(|s| s.phrases.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let config = CorpusConfig::default();
        assert!(config.validate().is_ok());

        let categories = config.categories();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0], "FEVER");
        assert_eq!(categories[3], "SORE_THROAT");
        assert_eq!(config.context_phrases.len(), 10);

        let throat = config.phrases(&Category::new("SORE_THROAT")).unwrap();
        assert!(throat.iter().any(|p| p == "sore throat"));
        assert!(config.phrases(&Category::new("RASH")).is_none());
    }

    #[test]
    fn test_rejects_empty_category_set() {
        let result = CorpusConfig::new(Vec::new(), vec!["since morning".to_string()]);
        assert!(matches!(
            result,
            Err(SymptomError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_category_without_phrases() {
        let result = CorpusConfig::new(
            vec![CategorySeeds {
                category: Category::new("FEVER"),
                phrases: Vec::new(),
            }],
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(SymptomError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let seeds = CategorySeeds {
            category: Category::new("FEVER"),
            phrases: vec!["i have fever".to_string()],
        };
        let result = CorpusConfig::new(vec![seeds.clone(), seeds], Vec::new());
        assert!(matches!(
            result,
            Err(SymptomError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seeds.json");
        let config = CorpusConfig::default();
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = CorpusConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
