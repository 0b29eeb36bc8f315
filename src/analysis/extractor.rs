//! Feature extraction: word tokens plus character n-grams.
//!
//! Character n-grams make the classifier tolerant to the single-character
//! typos that users (and the corpus synthesizer) produce: `"coughng"` still
//! shares `g3:cou`, `g3:oug`, `g4:coug` and friends with `"coughing"`.

use ahash::AHashMap;

use crate::analysis::feature::FeatureToken;
use crate::analysis::normalizer::Normalizer;

/// Words shorter than this do not produce a word token.
pub const MIN_WORD_LEN: usize = 2;

/// Character n-gram lengths emitted for every word.
pub const NGRAM_SIZES: [usize; 2] = [3, 4];

/// Turns raw text into an ordered sequence of feature tokens.
///
/// For each whitespace separated word of the normalized text the extractor
/// emits the word token (if the word has at least [`MIN_WORD_LEN`]
/// characters) immediately followed by every overlapping n-gram for each
/// size in [`NGRAM_SIZES`] that fits in the word. Lengths are counted in
/// Unicode scalar values, not bytes.
///
/// Duplicates are kept: downstream consumers treat the output as a multiset.
#[derive(Clone, Debug, Default)]
pub struct FeatureExtractor {
    normalizer: Normalizer,
}

impl FeatureExtractor {
    /// Create a new feature extractor.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
        }
    }

    /// Extract the feature sequence of `text`.
    pub fn extract(&self, text: &str) -> Vec<FeatureToken> {
        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut features = Vec::new();
        for word in normalized.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();

            if chars.len() >= MIN_WORD_LEN {
                features.push(FeatureToken::word(word));
            }

            for n in NGRAM_SIZES {
                if chars.len() < n {
                    continue;
                }
                for window in chars.windows(n) {
                    let gram: String = window.iter().collect();
                    features.push(FeatureToken::ngram(n, &gram));
                }
            }
        }

        features
    }

    /// Extract features and fold them into a multiset.
    pub fn count(&self, text: &str) -> FeatureCounts {
        FeatureCounts::from_features(self.extract(text))
    }

    /// Get the name of this extractor for debugging and logging.
    pub fn name(&self) -> &'static str {
        "word_char_ngram"
    }
}

/// Extract features with the default [`FeatureExtractor`].
pub fn extract(text: &str) -> Vec<FeatureToken> {
    FeatureExtractor::new().extract(text)
}

/// A multiset of features that remembers first-seen order.
///
/// Iteration order is the order in which each distinct feature first
/// appeared, so sums over the counts are reproducible bit for bit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCounts {
    entries: Vec<(FeatureToken, usize)>,
}

impl FeatureCounts {
    /// Fold a feature sequence into counts.
    pub fn from_features<I>(features: I) -> Self
    where
        I: IntoIterator<Item = FeatureToken>,
    {
        let mut index: AHashMap<FeatureToken, usize> = AHashMap::new();
        let mut entries: Vec<(FeatureToken, usize)> = Vec::new();

        for feature in features {
            match index.get(&feature) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(feature.clone(), entries.len());
                    entries.push((feature, 1));
                }
            }
        }

        Self { entries }
    }

    /// Iterate over `(feature, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&FeatureToken, usize)> {
        self.entries.iter().map(|(feature, count)| (feature, *count))
    }

    /// Number of distinct features.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no feature was seen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of feature occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}
