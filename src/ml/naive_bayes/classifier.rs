//! Symptom classifier trait definition.

use crate::corpus::Category;

/// Symptom classifier trait.
///
/// Implementations map free-form text to exactly one category. Prediction
/// is infallible: empty or unrecognisable text still yields a category.
pub trait SymptomClassifier: Send + Sync {
    /// Predict the category for the given text.
    fn predict(&self, text: &str) -> Category;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
