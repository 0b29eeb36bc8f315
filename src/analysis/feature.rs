//! Feature tokens emitted by the extractor.
//!
//! A feature token is a string tagged by its kind. Word tokens are written
//! `w:<word>` and character n-grams `g<n>:<ngram>`. The tagged string is the
//! identity of the feature: it is what the vocabulary stores and what a
//! persisted model contains.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of whole-word feature tokens.
pub const WORD_PREFIX: &str = "w:";

/// A kind-tagged feature string such as `w:cough` or `g3:oug`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureToken(String);

impl FeatureToken {
    /// Create a word feature.
    pub fn word(word: &str) -> Self {
        FeatureToken(format!("{WORD_PREFIX}{word}"))
    }

    /// Create a character n-gram feature of length `n`.
    pub fn ngram(n: usize, gram: &str) -> Self {
        FeatureToken(format!("g{n}:{gram}"))
    }

    /// Wrap an already tagged feature string, as read back from a model.
    pub fn from_tagged<S: Into<String>>(tagged: S) -> Self {
        FeatureToken(tagged.into())
    }

    /// The tagged string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FeatureToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
