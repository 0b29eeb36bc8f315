//! End-to-end training run.
//!
//! Seed once, synthesize, split, train, evaluate:
//!
//! ```text
//! CorpusSynthesizer -> train_eval_split -> NaiveBayesTrainer -> evaluate
//! ```
//!
//! A single `StdRng` drives synthesis and the split, so a given
//! [`TrainingConfig::seed`] always yields the same model.

use std::sync::Arc;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::corpus::{CorpusConfig, CorpusSynthesizer, SynthesisConfig, train_eval_split};
use crate::error::{Result, SymptomError};
use crate::ml::naive_bayes::{
    Evaluation, NaiveBayesClassifier, NaiveBayesModel, NaiveBayesTrainer, TrainerConfig, evaluate,
};

/// Parameters of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Noisy examples synthesized per category.
    pub examples_per_category: usize,
    /// Maximum vocabulary size.
    pub vocab_cap: usize,
    /// Additive smoothing constant.
    pub alpha: f64,
    /// Share of the corpus used for training; the rest is held out.
    pub train_ratio: f64,
    /// Seed of the run's random generator.
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            examples_per_category: 900,
            vocab_cap: 2200,
            alpha: 1.0,
            train_ratio: 0.85,
            seed: 7,
        }
    }
}

impl TrainingConfig {
    /// Validate every parameter up front.
    pub fn validate(&self) -> Result<()> {
        self.trainer_config().validate()?;
        if !(self.train_ratio > 0.0 && self.train_ratio <= 1.0) {
            return Err(SymptomError::invalid_config(format!(
                "train_ratio must be within (0, 1], got {}",
                self.train_ratio
            )));
        }
        Ok(())
    }

    fn trainer_config(&self) -> TrainerConfig {
        TrainerConfig {
            vocab_cap: self.vocab_cap,
            alpha: self.alpha,
        }
    }
}

/// Outcome of a training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// The trained model.
    pub model: NaiveBayesModel,
    /// Accuracy on the held-out split.
    pub evaluation: Evaluation,
    /// Final vocabulary size.
    pub vocab_size: usize,
    /// Number of training examples.
    pub train_size: usize,
    /// Number of held-out examples.
    pub eval_size: usize,
}

/// Wires corpus synthesis, training and evaluation together.
#[derive(Debug, Clone)]
pub struct TrainingPipeline {
    corpus: CorpusConfig,
    synthesis: SynthesisConfig,
    training: TrainingConfig,
}

impl TrainingPipeline {
    /// Create a new pipeline; all configuration is validated here.
    pub fn new(
        corpus: CorpusConfig,
        synthesis: SynthesisConfig,
        training: TrainingConfig,
    ) -> Result<Self> {
        corpus.validate()?;
        synthesis.validate()?;
        training.validate()?;
        Ok(Self {
            corpus,
            synthesis,
            training,
        })
    }

    /// Run the pipeline once.
    pub fn run(&self) -> Result<TrainingReport> {
        let mut rng = StdRng::seed_from_u64(self.training.seed);

        let synthesizer = CorpusSynthesizer::new(&self.corpus, self.synthesis.clone())?;
        let examples = synthesizer.generate(self.training.examples_per_category, &mut rng);

        let (train, held_out) = train_eval_split(examples, self.training.train_ratio, &mut rng)?;
        info!(
            "Split corpus into {} training and {} evaluation examples",
            train.len(),
            held_out.len()
        );

        let categories = self.corpus.categories();
        let trainer = NaiveBayesTrainer::new(self.training.trainer_config())?;
        let model = trainer.train(&categories, &train)?;

        let classifier = NaiveBayesClassifier::new(Arc::new(model));
        let evaluation = evaluate(&classifier, &categories, &held_out);
        info!(
            "Evaluation accuracy {:.4} on {} samples",
            evaluation.accuracy, evaluation.total
        );

        let model = classifier.model().clone();
        Ok(TrainingReport {
            vocab_size: model.vocabulary().len(),
            train_size: train.len(),
            eval_size: held_out.len(),
            model,
            evaluation,
        })
    }
}
