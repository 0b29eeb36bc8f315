//! Text analysis for the symptom classifier.
//!
//! Raw user text flows through two stages before it reaches the estimator:
//!
//! 1. [`normalizer`] lower-cases the text, turns punctuation into spaces and
//!    collapses whitespace.
//! 2. [`extractor`] splits the normalized text into words and emits
//!    [`feature::FeatureToken`]s: one word token per word of at least two
//!    characters plus every overlapping character 3-gram and 4-gram.
//!
//! # Examples
//!
//! ```
//! use symptom_nb::analysis::extractor::extract;
//!
//! let features: Vec<String> = extract("Cough!")
//!     .into_iter()
//!     .map(|f| f.to_string())
//!     .collect();
//!
//! assert_eq!(
//!     features,
//!     vec!["w:cough", "g3:cou", "g3:oug", "g3:ugh", "g4:coug", "g4:ough"]
//! );
//! ```

pub mod extractor;
pub mod feature;
pub mod normalizer;
