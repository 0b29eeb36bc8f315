//! Multinomial Naive Bayes estimation in log-space.

use ahash::AHashMap;
use log::{debug, info};

use crate::analysis::extractor::{FeatureCounts, FeatureExtractor};
use crate::corpus::{Category, LabeledExample};
use crate::error::{Result, SymptomError};
use crate::ml::naive_bayes::model::{MODEL_VERSION, NaiveBayesModel};
use crate::ml::naive_bayes::vocabulary::Vocabulary;

/// Estimator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainerConfig {
    /// Maximum vocabulary size (must be >= 1).
    pub vocab_cap: usize,
    /// Additive smoothing constant (must be > 0).
    pub alpha: f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            vocab_cap: 2200,
            alpha: 1.0,
        }
    }
}

impl TrainerConfig {
    /// Reject parameters that would produce zero or undefined probabilities.
    pub fn validate(&self) -> Result<()> {
        if self.vocab_cap < 1 {
            return Err(SymptomError::invalid_config("vocab_cap must be >= 1"));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(SymptomError::invalid_config(format!(
                "smoothing alpha must be a finite value > 0, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Trains a [`NaiveBayesModel`] from labeled examples.
///
/// With `V` the vocabulary size, `N` the number of examples and `K` the
/// number of classes:
///
/// ```text
/// log_prior[c]    = ln((docs[c] + 1) / (N + K))
/// log_prob[c][f]  = ln((count[c][f] + alpha) / (total[c] + alpha * V))
/// unk_log_prob[c] = ln(alpha / (total[c] + alpha * V))
/// ```
///
/// where `count[c][f]` and `total[c]` only count occurrences of vocabulary
/// features. A class without any example still gets finite values through
/// smoothing.
///
/// Every log-probability is finite and at most zero. It is strictly negative
/// except with a one-feature vocabulary (`V = 1`): there `count[c][f]` equals
/// `total[c]`, so each class's only row entry is `ln(1) = 0`, and a class with
/// `total[c] = 0` also gets `unk_log_prob = ln(alpha / alpha) = 0`. A
/// vocabulary of two or more features keeps every value below zero.
#[derive(Debug, Clone)]
pub struct NaiveBayesTrainer {
    config: TrainerConfig,
    extractor: FeatureExtractor,
}

impl NaiveBayesTrainer {
    /// Create a new trainer with validated parameters.
    pub fn new(config: TrainerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            extractor: FeatureExtractor::new(),
        })
    }

    /// Train over `examples`, with `categories` fixing the class order.
    ///
    /// Every example label must be one of `categories`. Categories without
    /// examples are allowed.
    pub fn train(
        &self,
        categories: &[Category],
        examples: &[LabeledExample],
    ) -> Result<NaiveBayesModel> {
        if categories.is_empty() {
            return Err(SymptomError::invalid_config("category set is empty"));
        }

        let mut class_index: AHashMap<&Category, usize> = AHashMap::new();
        for (i, category) in categories.iter().enumerate() {
            if class_index.insert(category, i).is_some() {
                return Err(SymptomError::invalid_config(format!(
                    "duplicate category: {category}"
                )));
            }
        }

        // Extract once; each example's features are needed twice.
        let mut documents: Vec<(usize, FeatureCounts)> = Vec::with_capacity(examples.len());
        for example in examples {
            let class = *class_index.get(&example.category).ok_or_else(|| {
                SymptomError::invalid_config(format!(
                    "example labeled with unknown category: {}",
                    example.category
                ))
            })?;
            documents.push((class, self.extractor.count(&example.text)));
        }

        let global = FeatureCounts::from_features(
            documents
                .iter()
                .flat_map(|(_, counts)| {
                    counts
                        .iter()
                        .flat_map(|(f, c)| std::iter::repeat_n(f.clone(), c))
                }),
        );
        let vocabulary = Vocabulary::build(&global, self.config.vocab_cap);
        if vocabulary.is_empty() {
            return Err(SymptomError::invalid_config(
                "training examples produced no features",
            ));
        }
        info!(
            "Built vocabulary of {} features from {} distinct ({} examples)",
            vocabulary.len(),
            global.len(),
            examples.len()
        );

        let n_classes = categories.len();
        let v = vocabulary.len();
        let mut class_docs = vec![0usize; n_classes];
        let mut token_counts = vec![vec![0usize; v]; n_classes];
        let mut total_tokens = vec![0usize; n_classes];

        for (class, counts) in &documents {
            class_docs[*class] += 1;
            for (feature, count) in counts.iter() {
                if let Some(j) = vocabulary.index_of(feature) {
                    token_counts[*class][j] += count;
                    total_tokens[*class] += count;
                }
            }
        }

        let alpha = self.config.alpha;
        let total_docs = documents.len() as f64;
        let mut log_prior = Vec::with_capacity(n_classes);
        let mut log_prob = Vec::with_capacity(n_classes);
        let mut unk_log_prob = Vec::with_capacity(n_classes);

        for class in 0..n_classes {
            let prior = (class_docs[class] as f64 + 1.0) / (total_docs + n_classes as f64);
            log_prior.push(prior.ln());

            let denom = total_tokens[class] as f64 + alpha * v as f64;
            let row: Vec<f64> = token_counts[class]
                .iter()
                .map(|&count| ((count as f64 + alpha) / denom).ln())
                .collect();
            log_prob.push(row);
            unk_log_prob.push((alpha / denom).ln());

            debug!(
                "class {}: {} docs, {} in-vocabulary tokens, log_prior {:.4}",
                categories[class], class_docs[class], total_tokens[class], log_prior[class]
            );
        }

        NaiveBayesModel::from_parts(
            categories.to_vec(),
            vocabulary,
            log_prior,
            log_prob,
            unk_log_prob,
            MODEL_VERSION,
        )
    }
}

/// Train with the given vocabulary cap and smoothing constant.
pub fn train(
    categories: &[Category],
    examples: &[LabeledExample],
    vocab_cap: usize,
    alpha: f64,
) -> Result<NaiveBayesModel> {
    NaiveBayesTrainer::new(TrainerConfig { vocab_cap, alpha })?.train(categories, examples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::feature::FeatureToken;

    fn example(text: &str, label: &str) -> LabeledExample {
        LabeledExample::new(text, Category::new(label))
    }

    fn categories(labels: &[&str]) -> Vec<Category> {
        labels.iter().map(|l| Category::new(*l)).collect()
    }

    #[test]
    fn test_priors_use_add_one_smoothing() {
        let examples = vec![
            example("fever", "FEVER"),
            example("high fever", "FEVER"),
            example("runny nose", "COLD"),
        ];
        let model = train(&categories(&["FEVER", "COLD", "COUGH"]), &examples, 100, 1.0).unwrap();

        // (2 + 1) / (3 + 3), (1 + 1) / 6, (0 + 1) / 6
        let expected = [0.5f64.ln(), (2.0f64 / 6.0).ln(), (1.0f64 / 6.0).ln()];
        for (got, want) in model.log_prior().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_likelihood_formula() {
        let examples = vec![example("ab ab", "A"), example("cd", "B")];
        let model = train(&categories(&["A", "B"]), &examples, 10, 0.5).unwrap();

        // Vocabulary: w:ab (2), w:cd (1).
        assert_eq!(model.vocabulary().len(), 2);
        assert_eq!(model.vocabulary().features()[0], FeatureToken::word("ab"));

        // Class A: count(ab)=2, total=2, denom = 2 + 0.5 * 2 = 3.
        let row = &model.log_prob()[0];
        assert!((row[0] - (2.5f64 / 3.0).ln()).abs() < 1e-12);
        assert!((row[1] - (0.5f64 / 3.0).ln()).abs() < 1e-12);
        assert!((model.unk_log_prob()[0] - (0.5f64 / 3.0).ln()).abs() < 1e-12);

        // Class B: count(cd)=1, total=1, denom = 1 + 1 = 2.
        let row = &model.log_prob()[1];
        assert!((row[0] - (0.5f64 / 2.0).ln()).abs() < 1e-12);
        assert!((row[1] - (1.5f64 / 2.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_vocabulary_features_not_counted() {
        // Cap 1 keeps only w:ab; w:cd occurrences must not enter totals.
        let examples = vec![example("ab ab", "A"), example("ab cd cd cd", "A")];
        let model = train(&categories(&["A"]), &examples, 1, 1.0).unwrap();

        assert_eq!(model.vocabulary().len(), 1);
        // count=3, total=3, denom = 3 + 1.
        assert!((model.log_prob()[0][0] - (4.0f64 / 4.0).ln()).abs() < 1e-12);
        assert!((model.unk_log_prob()[0] - (1.0f64 / 4.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_imbalanced_classes_keep_nonzero_mass() {
        let mut examples: Vec<LabeledExample> =
            (0..200).map(|_| example("burning fever", "FEVER")).collect();
        examples.push(example("nose", "COLD"));

        let model = train(&categories(&["FEVER", "COLD"]), &examples, 50, 1.0).unwrap();
        let fever_only = model
            .vocabulary()
            .index_of(&FeatureToken::word("fever"))
            .unwrap();

        let cold_row = &model.log_prob()[1];
        assert!(cold_row[fever_only].is_finite());
        assert!(cold_row[fever_only].exp() > 0.0);
    }

    #[test]
    fn test_class_without_examples() {
        let examples = vec![example("fever", "FEVER")];
        let model = train(&categories(&["FEVER", "COLD"]), &examples, 10, 1.0).unwrap();

        for v in model.log_prob()[1].iter().chain(&model.unk_log_prob()[1..]) {
            assert!(v.is_finite() && *v < 0.0);
        }
    }

    #[test]
    fn test_single_feature_vocabulary_reaches_zero() {
        let examples = vec![example("ab ab", "A"), example("cd", "A")];
        let model = train(&categories(&["A", "B"]), &examples, 1, 1.0).unwrap();
        assert_eq!(model.vocabulary().len(), 1);

        // Both rows hold ln(1); only the empty class also has a zero unknown mass.
        assert_eq!(model.log_prob()[0][0], 0.0);
        assert_eq!(model.log_prob()[1][0], 0.0);
        assert!(model.unk_log_prob()[0] < 0.0);
        assert_eq!(model.unk_log_prob()[1], 0.0);

        // One more vocabulary feature is enough for strictly negative values.
        let model = train(&categories(&["A", "B"]), &examples, 2, 1.0).unwrap();
        for v in model.log_prob().iter().flatten().chain(model.unk_log_prob()) {
            assert!(*v < 0.0);
        }
    }

    #[test]
    fn test_invalid_configuration() {
        let examples = vec![example("fever", "FEVER")];
        let cats = categories(&["FEVER"]);

        for (cap, alpha) in [(0, 1.0), (10, 0.0), (10, -1.0), (10, f64::NAN)] {
            assert!(matches!(
                train(&cats, &examples, cap, alpha),
                Err(SymptomError::InvalidConfiguration(_))
            ));
        }

        assert!(matches!(
            train(&[], &examples, 10, 1.0),
            Err(SymptomError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            train(&categories(&["A", "A"]), &examples, 10, 1.0),
            Err(SymptomError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_unknown_label_rejected() {
        let examples = vec![example("rash", "RASH")];
        assert!(matches!(
            train(&categories(&["FEVER"]), &examples, 10, 1.0),
            Err(SymptomError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_featureless_corpus_rejected() {
        let examples = vec![example("!!", "FEVER"), example("a", "FEVER")];
        assert!(matches!(
            train(&categories(&["FEVER"]), &examples, 10, 1.0),
            Err(SymptomError::InvalidConfiguration(_))
        ));
    }
}
