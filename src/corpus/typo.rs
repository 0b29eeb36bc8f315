//! Single-character typo injection.

use rand::Rng;

/// The edit applied to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypoOp {
    /// Remove the character at a position.
    Delete,
    /// Swap the character at a position with the next one.
    Swap,
    /// Repeat the character at a position.
    Duplicate,
    /// Overwrite the character at a position with a random lowercase letter.
    Replace,
}

impl TypoOp {
    const ALL: [TypoOp; 4] = [TypoOp::Delete, TypoOp::Swap, TypoOp::Duplicate, TypoOp::Replace];
}

/// Injects at most one single-character edit into a word.
///
/// A word is eligible when it has at least `min_len` characters; an eligible
/// word is still left alone with probability `skip_probability`. Otherwise
/// one operation and one position are drawn uniformly, and the operation is
/// attempted exactly once. When its precondition fails the word comes back
/// unchanged:
///
/// - delete needs strictly more than `min_len` characters, so a word of
///   exactly `min_len` characters can draw delete and stay intact
/// - swap needs a character after the drawn position
///
/// Both quirks are kept on purpose: they are deterministic given the seed
/// and changing them would change every generated corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypoInjector {
    min_len: usize,
    skip_probability: f64,
}

impl Default for TypoInjector {
    fn default() -> Self {
        Self {
            min_len: 4,
            skip_probability: 0.55,
        }
    }
}

impl TypoInjector {
    /// Create a new typo injector.
    pub fn new(min_len: usize, skip_probability: f64) -> Self {
        Self {
            min_len,
            skip_probability,
        }
    }

    /// Possibly corrupt `word`.
    pub fn apply<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < self.min_len || rng.random::<f64>() < self.skip_probability {
            return word.to_string();
        }

        let op = TypoOp::ALL[rng.random_range(0..TypoOp::ALL.len())];
        let i = rng.random_range(0..chars.len());
        self.edit(&chars, op, i, rng).unwrap_or_else(|| word.to_string())
    }

    /// Apply `op` at character position `i`, or `None` when the precondition fails.
    fn edit<R: Rng + ?Sized>(
        &self,
        chars: &[char],
        op: TypoOp,
        i: usize,
        rng: &mut R,
    ) -> Option<String> {
        let mut out = chars.to_vec();
        match op {
            TypoOp::Delete => {
                if chars.len() <= self.min_len {
                    return None;
                }
                out.remove(i);
            }
            TypoOp::Swap => {
                if i + 1 >= chars.len() {
                    return None;
                }
                out.swap(i, i + 1);
            }
            TypoOp::Duplicate => out.insert(i, chars[i]),
            TypoOp::Replace => out[i] = rng.random_range(b'a'..=b'z') as char,
        }
        Some(out.into_iter().collect())
    }
}
