//! # symptom-nb
//!
//! Maps short, noisy, free-form symptom descriptions ("throat pain since
//! morning") to one of a fixed set of symptom categories.
//!
//! ## Pipeline
//!
//! - [`analysis`]: deterministic normalization and word + character n-gram
//!   feature extraction
//! - [`corpus`]: seeded synthetic corpus generation with typo noise and
//!   blended two-category examples
//! - [`ml::naive_bayes`]: multinomial Naive Bayes trained in log-space with
//!   additive smoothing, and arg-max inference
//! - [`storage`]: flat, versioned JSON model persistence
//! - [`pipeline`]: seed, synthesize, split, train, evaluate
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use symptom_nb::corpus::{CorpusConfig, SynthesisConfig};
//! use symptom_nb::ml::naive_bayes::{NaiveBayesClassifier, SymptomClassifier};
//! use symptom_nb::pipeline::{TrainingConfig, TrainingPipeline};
//!
//! # fn main() -> symptom_nb::error::Result<()> {
//! let synthesis = SynthesisConfig {
//!     blended_examples: 60,
//!     ..SynthesisConfig::default()
//! };
//! let training = TrainingConfig {
//!     examples_per_category: 100,
//!     ..TrainingConfig::default()
//! };
//! let pipeline = TrainingPipeline::new(CorpusConfig::default(), synthesis, training)?;
//! let report = pipeline.run()?;
//!
//! let classifier = NaiveBayesClassifier::new(Arc::new(report.model));
//! assert_eq!(classifier.predict("sore throat").as_str(), "SORE_THROAT");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod ml;
pub mod pipeline;
pub mod storage;

pub mod prelude {
    pub use crate::corpus::{Category, CorpusConfig, LabeledExample, SynthesisConfig};
    pub use crate::error::{Result, SymptomError};
    pub use crate::ml::naive_bayes::{
        NaiveBayesClassifier, NaiveBayesModel, SymptomClassifier, classify, train,
    };
    pub use crate::pipeline::{TrainingConfig, TrainingPipeline};
    pub use crate::storage::ModelStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
