//! Held-out accuracy.

use serde::{Deserialize, Serialize};

use crate::corpus::{Category, LabeledExample};
use crate::ml::naive_bayes::classifier::SymptomClassifier;

/// Accuracy on one category's held-out examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEvaluation {
    pub category: Category,
    pub total: usize,
    pub correct: usize,
}

/// Result of scoring a classifier against labeled examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Number of examples scored.
    pub total: usize,
    /// Number of examples whose prediction matched the label.
    pub correct: usize,
    /// `correct / total`, or 0.0 for an empty evaluation set.
    pub accuracy: f64,
    /// Breakdown per category, in the order given to [`evaluate`].
    pub per_label: Vec<LabelEvaluation>,
}

/// Classify every example and tally hits.
///
/// `labels` fixes the order of the per-category breakdown; examples whose
/// label is not listed still count towards the overall accuracy.
pub fn evaluate<C>(classifier: &C, labels: &[Category], examples: &[LabeledExample]) -> Evaluation
where
    C: SymptomClassifier + ?Sized,
{
    let mut per_label: Vec<LabelEvaluation> = labels
        .iter()
        .map(|category| LabelEvaluation {
            category: category.clone(),
            total: 0,
            correct: 0,
        })
        .collect();

    let mut correct = 0;
    for example in examples {
        let hit = classifier.predict(&example.text) == example.category;
        if hit {
            correct += 1;
        }
        if let Some(entry) = per_label.iter_mut().find(|e| e.category == example.category) {
            entry.total += 1;
            if hit {
                entry.correct += 1;
            }
        }
    }

    let total = examples.len();
    let accuracy = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    };

    Evaluation {
        total,
        correct,
        accuracy,
        per_label,
    }
}
