//! Multinomial Naive Bayes symptom classifier.
//!
//! # Architecture
//!
//! - `SymptomClassifier` trait: common interface for classifiers
//! - `NaiveBayesTrainer`: estimates a model from labeled examples
//! - `NaiveBayesModel`: the immutable trained artifact
//! - `NaiveBayesClassifier`: log-posterior scoring and arg-max inference
//! - `Vocabulary`: frequency-capped, order-preserving feature index
//! - `evaluate`: held-out accuracy
//!
//! All probabilities live in log-space, so long inputs never underflow, and
//! additive smoothing keeps every stored probability strictly positive.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use symptom_nb::corpus::{Category, LabeledExample};
//! use symptom_nb::ml::naive_bayes::{NaiveBayesClassifier, SymptomClassifier, train};
//!
//! # fn main() -> symptom_nb::error::Result<()> {
//! let categories = vec![Category::new("FEVER"), Category::new("COLD")];
//! let examples = vec![
//!     LabeledExample::new("high fever", Category::new("FEVER")),
//!     LabeledExample::new("runny nose", Category::new("COLD")),
//! ];
//!
//! let model = train(&categories, &examples, 2200, 1.0)?;
//! let classifier = NaiveBayesClassifier::new(Arc::new(model));
//! assert_eq!(classifier.predict("my nose is running"), Category::new("COLD"));
//! # Ok(())
//! # }
//! ```

mod classifier;
mod evaluation;
mod model;
mod nb_classifier;
mod trainer;
mod vocabulary;

// Public exports
pub use classifier::SymptomClassifier;
pub use evaluation::{Evaluation, LabelEvaluation, evaluate};
pub use model::{MODEL_VERSION, NaiveBayesModel};
pub use nb_classifier::{NaiveBayesClassifier, classify};
pub use trainer::{NaiveBayesTrainer, TrainerConfig, train};
pub use vocabulary::Vocabulary;
