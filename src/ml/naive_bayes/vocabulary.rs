//! Frequency-capped feature vocabulary.

use ahash::AHashMap;

use crate::analysis::extractor::FeatureCounts;
use crate::analysis::feature::FeatureToken;
use crate::error::{Result, SymptomError};

/// Ordered feature list plus its inverse lookup.
///
/// Position in the list is the feature index used by every row of the
/// likelihood matrix. The order is the one chosen at training time
/// (descending corpus frequency, ties in first-seen order) and is preserved
/// verbatim through persistence; it is never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    features: Vec<FeatureToken>,
    index: AHashMap<FeatureToken, usize>,
}

impl Vocabulary {
    /// Keep the `cap` most frequent features of `counts`.
    ///
    /// The sort is stable, so equally frequent features keep the order in
    /// which they were first seen.
    pub fn build(counts: &FeatureCounts, cap: usize) -> Self {
        let mut ranked: Vec<(&FeatureToken, usize)> = counts.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(cap);

        let features: Vec<FeatureToken> = ranked.into_iter().map(|(f, _)| f.clone()).collect();
        Self::from_unique(features)
    }

    /// Rebuild a vocabulary from a stored feature list.
    ///
    /// Fails with `MalformedModel` if a feature appears twice, since the
    /// index would be ambiguous.
    pub fn from_features(features: Vec<FeatureToken>) -> Result<Self> {
        let vocabulary = Self::from_unique(features);
        if vocabulary.index.len() != vocabulary.features.len() {
            return Err(SymptomError::malformed_model(
                "vocabulary contains duplicate features",
            ));
        }
        Ok(vocabulary)
    }

    fn from_unique(features: Vec<FeatureToken>) -> Self {
        let index = features
            .iter()
            .enumerate()
            .map(|(i, f)| (f.clone(), i))
            .collect();
        Self { features, index }
    }

    /// Index of `feature`, or `None` when it is out of vocabulary.
    pub fn index_of(&self, feature: &FeatureToken) -> Option<usize> {
        self.index.get(feature).copied()
    }

    /// Features in index order.
    pub fn features(&self) -> &[FeatureToken] {
        &self.features
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.features == other.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::FeatureExtractor;

    fn tokens(tagged: &[&str]) -> Vec<FeatureToken> {
        tagged.iter().map(|t| FeatureToken::from_tagged(*t)).collect()
    }

    #[test]
    fn test_build_orders_by_frequency_then_first_seen() {
        let counts = FeatureCounts::from_features(tokens(&[
            "w:a", "w:b", "w:c", "w:b", "w:d", "w:c", "w:b",
        ]));
        let vocabulary = Vocabulary::build(&counts, 10);

        // b:3, c:2, then a and d tie at 1 in first-seen order.
        assert_eq!(vocabulary.features(), tokens(&["w:b", "w:c", "w:a", "w:d"]).as_slice());
        assert_eq!(vocabulary.index_of(&FeatureToken::from_tagged("w:a")), Some(2));
    }

    #[test]
    fn test_build_respects_cap() {
        let counts = FeatureExtractor::new().count("stomach pain and stomach burning");
        let vocabulary = Vocabulary::build(&counts, 3);

        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.features()[0], FeatureToken::word("stomach"));
        assert_eq!(vocabulary.index_of(&FeatureToken::word("burning")), None);
    }

    #[test]
    fn test_from_features_preserves_order() {
        let features = tokens(&["w:z", "w:a", "g3:mid"]);
        let vocabulary = Vocabulary::from_features(features.clone()).unwrap();
        assert_eq!(vocabulary.features(), features.as_slice());
        assert_eq!(vocabulary.index_of(&FeatureToken::from_tagged("g3:mid")), Some(2));
    }

    #[test]
    fn test_from_features_rejects_duplicates() {
        let result = Vocabulary::from_features(tokens(&["w:a", "w:b", "w:a"]));
        assert!(matches!(result, Err(SymptomError::MalformedModel(_))));
    }
}
