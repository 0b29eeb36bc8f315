//! The trained Naive Bayes model.

use ahash::AHashSet;

use crate::analysis::feature::FeatureToken;
use crate::corpus::Category;
use crate::error::{Result, SymptomError};
use crate::ml::naive_bayes::vocabulary::Vocabulary;

/// Format version written by this build and the only one it reads.
pub const MODEL_VERSION: u32 = 2;

/// Immutable multinomial Naive Bayes model.
///
/// Holds, per class, a log-prior, one log-likelihood per vocabulary feature
/// and one log-likelihood shared by every out-of-vocabulary feature. All
/// values are finite logarithms. A model is never mutated after
/// construction, so it can be shared freely (for example behind an `Arc`)
/// between concurrent classification calls.
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesModel {
    labels: Vec<Category>,
    vocabulary: Vocabulary,
    log_prior: Vec<f64>,
    log_prob: Vec<Vec<f64>>,
    unk_log_prob: Vec<f64>,
    version: u32,
}

impl NaiveBayesModel {
    /// Assemble a model from its parts, checking every structural invariant.
    ///
    /// The version is taken as given; callers reading persisted data check
    /// it against [`MODEL_VERSION`] first.
    pub fn from_parts(
        labels: Vec<Category>,
        vocabulary: Vocabulary,
        log_prior: Vec<f64>,
        log_prob: Vec<Vec<f64>>,
        unk_log_prob: Vec<f64>,
        version: u32,
    ) -> Result<Self> {
        let n_classes = labels.len();
        if n_classes == 0 {
            return Err(SymptomError::malformed_model("model has no labels"));
        }

        let mut seen = AHashSet::new();
        if let Some(dup) = labels.iter().find(|l| !seen.insert(*l)) {
            return Err(SymptomError::malformed_model(format!(
                "duplicate label: {dup}"
            )));
        }

        for (name, len) in [
            ("log_prior", log_prior.len()),
            ("log_prob", log_prob.len()),
            ("unk_log_prob", unk_log_prob.len()),
        ] {
            if len != n_classes {
                return Err(SymptomError::malformed_model(format!(
                    "{name} has {len} entries for {n_classes} labels"
                )));
            }
        }

        for (class, row) in log_prob.iter().enumerate() {
            if row.len() != vocabulary.len() {
                return Err(SymptomError::malformed_model(format!(
                    "log_prob row {class} has {} entries for a vocabulary of {}",
                    row.len(),
                    vocabulary.len()
                )));
            }
        }

        let all_finite = log_prior
            .iter()
            .chain(unk_log_prob.iter())
            .chain(log_prob.iter().flatten())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(SymptomError::malformed_model(
                "model contains a non-finite log-probability",
            ));
        }

        Ok(Self {
            labels,
            vocabulary,
            log_prior,
            log_prob,
            unk_log_prob,
            version,
        })
    }

    /// Categories in class order.
    pub fn labels(&self) -> &[Category] {
        &self.labels
    }

    /// The frozen vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Log-prior per class.
    pub fn log_prior(&self) -> &[f64] {
        &self.log_prior
    }

    /// Class x vocabulary matrix of log-likelihoods.
    pub fn log_prob(&self) -> &[Vec<f64>] {
        &self.log_prob
    }

    /// Out-of-vocabulary log-likelihood per class.
    pub fn unk_log_prob(&self) -> &[f64] {
        &self.unk_log_prob
    }

    /// Format version tag.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of classes.
    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }

    /// Log-likelihood of `feature` under class `class`, falling back to the
    /// class's unknown-feature mass for out-of-vocabulary features.
    ///
    /// # Panics
    ///
    /// Panics if `class >= self.num_classes()`.
    pub fn feature_log_prob(&self, class: usize, feature: &FeatureToken) -> f64 {
        match self.vocabulary.index_of(feature) {
            Some(j) => self.log_prob[class][j],
            None => self.unk_log_prob[class],
        }
    }
}
