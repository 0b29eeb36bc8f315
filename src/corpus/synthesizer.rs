//! Synthetic training corpus generation.

use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::corpus::config::{CategorySeeds, CorpusConfig};
use crate::corpus::typo::TypoInjector;
use crate::corpus::types::LabeledExample;
use crate::error::{Result, SymptomError};

/// Connector placed between the two phrases of a blended example.
pub const BLEND_CONNECTOR: &str = "and";

/// Parameters of the corpus synthesizer.
///
/// The number of noisy examples per category is not part of this config: it
/// is the argument of [`CorpusSynthesizer::generate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Two-category examples labeled with their first category.
    pub blended_examples: usize,
    /// Probability of appending a context phrase.
    pub context_probability: f64,
    /// Probability of leaving an eligible word free of typos.
    pub typo_skip_probability: f64,
    /// Words shorter than this never receive a typo.
    pub min_typo_len: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            blended_examples: 600,
            context_probability: 0.85,
            typo_skip_probability: 0.55,
            min_typo_len: 4,
        }
    }
}

impl SynthesisConfig {
    /// Check that the probabilities are usable.
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("context_probability", self.context_probability),
            ("typo_skip_probability", self.typo_skip_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(SymptomError::invalid_config(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        Ok(())
    }
}

/// Generates labeled examples from a seed table.
///
/// Two kinds of examples are produced:
///
/// - **Noisy single-category examples.** A random seed phrase of the
///   category, optionally followed by a context phrase, with typos injected
///   word by word.
/// - **Blended examples.** Phrases of two distinct categories joined with
///   `"and"` and labeled with the *first* category only, without typos.
///
/// The blended examples carry deliberate label noise. They teach the model
/// that a multi-symptom utterance still has a winner, which makes it more
/// robust to "X and Y" phrasing. This is intended; do not relabel them.
#[derive(Debug, Clone)]
pub struct CorpusSynthesizer<'a> {
    corpus: &'a CorpusConfig,
    config: SynthesisConfig,
    typos: TypoInjector,
}

impl<'a> CorpusSynthesizer<'a> {
    /// Create a new synthesizer over a validated seed table.
    pub fn new(corpus: &'a CorpusConfig, config: SynthesisConfig) -> Result<Self> {
        corpus.validate()?;
        config.validate()?;
        let typos = TypoInjector::new(config.min_typo_len, config.typo_skip_probability);
        Ok(Self {
            corpus,
            config,
            typos,
        })
    }

    /// Generate the full corpus: `examples_per_category` noisy examples per
    /// category in class order, followed by the configured number of blended
    /// examples.
    ///
    /// Output is fully determined by the state of `rng`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        examples_per_category: usize,
        rng: &mut R,
    ) -> Vec<LabeledExample> {
        let mut examples = Vec::with_capacity(
            examples_per_category * self.corpus.categories.len() + self.config.blended_examples,
        );

        for seeds in &self.corpus.categories {
            for _ in 0..examples_per_category {
                examples.push(self.noisy_example(seeds, rng));
            }
        }

        if self.corpus.categories.len() >= 2 {
            for _ in 0..self.config.blended_examples {
                examples.push(self.blended_example(rng));
            }
        }

        info!(
            "Synthesized {} examples over {} categories",
            examples.len(),
            self.corpus.categories.len()
        );

        examples
    }

    fn noisy_example<R: Rng + ?Sized>(&self, seeds: &CategorySeeds, rng: &mut R) -> LabeledExample {
        let mut text = pick(&seeds.phrases, rng).to_string();
        self.maybe_append_context(&mut text, rng);

        let noisy: Vec<String> = text
            .split_whitespace()
            .map(|word| self.typos.apply(word, rng))
            .collect();

        LabeledExample::new(noisy.join(" "), seeds.category.clone())
    }

    fn blended_example<R: Rng + ?Sized>(&self, rng: &mut R) -> LabeledExample {
        let n = self.corpus.categories.len();
        let first = rng.random_range(0..n);
        let mut second = rng.random_range(0..n - 1);
        if second >= first {
            second += 1;
        }

        let a = &self.corpus.categories[first];
        let b = &self.corpus.categories[second];

        let mut text = format!(
            "{} {BLEND_CONNECTOR} {}",
            pick(&a.phrases, rng),
            pick(&b.phrases, rng)
        );
        self.maybe_append_context(&mut text, rng);

        LabeledExample::new(text, a.category.clone())
    }

    fn maybe_append_context<R: Rng + ?Sized>(&self, text: &mut String, rng: &mut R) {
        if rng.random::<f64>() < self.config.context_probability {
            if let Some(context) = self.corpus.context_phrases.choose(rng) {
                text.push(' ');
                text.push_str(context);
            }
        }
    }
}

/// Uniform pick from a non-empty list (guaranteed by `CorpusConfig::validate`).
fn pick<'s, R: Rng + ?Sized>(items: &'s [String], rng: &mut R) -> &'s str {
    items.choose(rng).map(String::as_str).unwrap_or_default()
}
