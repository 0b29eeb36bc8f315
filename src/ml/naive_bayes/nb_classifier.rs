//! Inference over a trained Naive Bayes model.

use std::sync::Arc;

use crate::analysis::extractor::{FeatureCounts, FeatureExtractor};
use crate::corpus::Category;
use crate::ml::naive_bayes::classifier::SymptomClassifier;
use crate::ml::naive_bayes::model::NaiveBayesModel;

/// Scores text against every class of a shared, read-only model.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    model: Arc<NaiveBayesModel>,
    extractor: FeatureExtractor,
}

impl NaiveBayesClassifier {
    /// Create a classifier over `model`.
    pub fn new(model: Arc<NaiveBayesModel>) -> Self {
        Self {
            model,
            extractor: FeatureExtractor::new(),
        }
    }

    /// The underlying model.
    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }

    /// Log-posterior score of every category, in model class order.
    ///
    /// Each score is the class log-prior plus, for every distinct feature of
    /// `text`, its count times the class log-likelihood of that feature.
    /// Text without features scores as the bare priors.
    pub fn scores(&self, text: &str) -> Vec<(Category, f64)> {
        let counts = self.extractor.count(text);
        log_posteriors(&self.model, &counts)
            .into_iter()
            .zip(self.model.labels())
            .map(|(score, label)| (label.clone(), score))
            .collect()
    }

    /// The highest scoring category, borrowed from the model.
    pub fn classify(&self, text: &str) -> &Category {
        classify(&self.model, text)
    }
}

impl SymptomClassifier for NaiveBayesClassifier {
    fn predict(&self, text: &str) -> Category {
        self.classify(text).clone()
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}

fn log_posteriors(model: &NaiveBayesModel, counts: &FeatureCounts) -> Vec<f64> {
    (0..model.num_classes())
        .map(|class| {
            counts
                .iter()
                .fold(model.log_prior()[class], |score, (feature, count)| {
                    score + count as f64 * model.feature_log_prob(class, feature)
                })
        })
        .collect()
}

/// Classify `text` with `model`.
///
/// Returns the arg-max of the log-posterior scores. Ties go to the category
/// that comes first in the model's class list.
pub fn classify<'m>(model: &'m NaiveBayesModel, text: &str) -> &'m Category {
    let counts = FeatureExtractor::new().count(text);
    let scores = log_posteriors(model, &counts);

    let mut best = 0;
    for (class, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = class;
        }
    }
    &model.labels()[best]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::feature::FeatureToken;
    use crate::corpus::LabeledExample;
    use crate::ml::naive_bayes::model::MODEL_VERSION;
    use crate::ml::naive_bayes::trainer::train;
    use crate::ml::naive_bayes::vocabulary::Vocabulary;

    fn tiny_model() -> NaiveBayesModel {
        let examples = vec![
            LabeledExample::new("fever chills", Category::new("FEVER")),
            LabeledExample::new("high fever", Category::new("FEVER")),
            LabeledExample::new("runny nose", Category::new("COLD")),
            LabeledExample::new("blocked nose", Category::new("COLD")),
        ];
        let categories = vec![Category::new("FEVER"), Category::new("COLD")];
        train(&categories, &examples, 100, 1.0).unwrap()
    }

    #[test]
    fn test_classify() {
        let model = tiny_model();
        assert_eq!(classify(&model, "I have a FEVER"), &Category::new("FEVER"));
        assert_eq!(classify(&model, "nose running"), &Category::new("COLD"));
    }

    #[test]
    fn test_scores_follow_class_order() {
        let classifier = NaiveBayesClassifier::new(Arc::new(tiny_model()));
        let scores = classifier.scores("fever");

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].0, "FEVER");
        assert_eq!(scores[1].0, "COLD");
        assert!(scores[0].1 > scores[1].1);
    }

    #[test]
    fn test_empty_text_falls_back_to_priors() {
        let model = tiny_model();
        let classifier = NaiveBayesClassifier::new(Arc::new(model.clone()));

        let scores = classifier.scores("");
        assert_eq!(scores[0].1, model.log_prior()[0]);
        assert_eq!(scores[1].1, model.log_prior()[1]);

        // Equal priors: the first class wins the tie.
        assert_eq!(classifier.predict(""), Category::new("FEVER"));
        assert_eq!(classifier.predict("?!"), Category::new("FEVER"));
    }

    #[test]
    fn test_out_of_vocabulary_uses_unknown_mass() {
        let model = tiny_model();
        let classifier = NaiveBayesClassifier::new(Arc::new(model.clone()));

        let scores = classifier.scores("zz");
        for (class, (_, score)) in scores.iter().enumerate() {
            let expected = model.log_prior()[class] + model.unk_log_prob()[class];
            assert!((score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_counts_multiply_log_likelihood() {
        let model = tiny_model();
        let classifier = NaiveBayesClassifier::new(Arc::new(model.clone()));

        let once = classifier.scores("zz");
        let twice = classifier.scores("zz zz");
        for class in 0..2 {
            let delta = twice[class].1 - once[class].1;
            assert!((delta - model.unk_log_prob()[class]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tie_breaks_by_class_order() {
        let vocabulary = Vocabulary::from_features(vec![FeatureToken::word("ab")]).unwrap();
        let model = NaiveBayesModel::from_parts(
            vec![Category::new("B"), Category::new("A")],
            vocabulary,
            vec![-0.7, -0.7],
            vec![vec![-0.1], vec![-0.1]],
            vec![-2.0, -2.0],
            MODEL_VERSION,
        )
        .unwrap();

        assert_eq!(classify(&model, "ab"), &Category::new("B"));
    }

    #[test]
    fn test_classifier_name() {
        let classifier = NaiveBayesClassifier::new(Arc::new(tiny_model()));
        assert_eq!(classifier.name(), "naive_bayes");
    }
}
