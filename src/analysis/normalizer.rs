//! Text normalization applied before feature extraction.
//!
//! # Examples
//!
//! ```
//! use symptom_nb::analysis::normalizer::normalize;
//!
//! assert_eq!(normalize("I HAVE Fever!!"), "i have fever");
//! assert_eq!(normalize("  ...  "), "");
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that is neither a Unicode word character nor whitespace.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Lower-cases text and strips punctuation.
///
/// The transformation is total and idempotent:
///
/// - every character is lower-cased (Unicode-aware)
/// - every character that is not a word character or whitespace becomes a space
/// - runs of whitespace collapse to a single space
/// - leading and trailing whitespace is trimmed
#[derive(Clone, Debug, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Normalizer
    }

    /// Normalize the given text.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = NON_WORD.replace_all(&lowered, " ");
        let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
        collapsed.trim().to_string()
    }

    /// Get the name of this normalizer for debugging and logging.
    pub fn name(&self) -> &'static str {
        "lowercase_strip_punct"
    }
}

/// Normalize text with the default [`Normalizer`].
pub fn normalize(text: &str) -> String {
    Normalizer.normalize(text)
}
