//! Common types for corpus synthesis and training.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A symptom category label such as `SORE_THROAT`.
///
/// Categories are opaque: identity is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a new category label.
    pub fn new<S: Into<String>>(label: S) -> Self {
        Category(label.into())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::new(label)
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Training or evaluation example: a piece of text and its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    /// Example text.
    pub text: String,
    /// Category label.
    pub category: Category,
}

impl LabeledExample {
    /// Create a new labeled example.
    pub fn new<S: Into<String>>(text: S, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_equality() {
        let category = Category::new("FEVER");
        assert_eq!(category, "FEVER");
        assert_eq!(category, Category::from("FEVER"));
        assert_ne!(category, Category::new("fever"));
        assert_eq!(category.to_string(), "FEVER");
    }

    #[test]
    fn test_example_serialization() {
        let example = LabeledExample::new("runny nose", Category::new("COLD"));
        let json = serde_json::to_string(&example).unwrap();
        assert_eq!(json, r#"{"text":"runny nose","category":"COLD"}"#);
    }
}
