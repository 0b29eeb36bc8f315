//! Synthetic labeled corpus for training and evaluation.
//!
//! # Architecture
//!
//! - [`CorpusConfig`]: immutable seed table and context phrase list
//! - [`CorpusSynthesizer`]: generates noisy and blended [`LabeledExample`]s
//! - [`TypoInjector`]: per-word single-character noise
//! - [`train_eval_split`]: seeded shuffle and cut
//!
//! Randomness is never ambient: every operation takes an explicit `&mut impl
//! Rng`, so a run seeded once with `StdRng::seed_from_u64` is reproducible.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use symptom_nb::corpus::{CorpusConfig, CorpusSynthesizer, SynthesisConfig};
//!
//! # fn main() -> symptom_nb::error::Result<()> {
//! let corpus = CorpusConfig::default();
//! let synthesizer = CorpusSynthesizer::new(&corpus, SynthesisConfig::default())?;
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let examples = synthesizer.generate(10, &mut rng);
//! assert_eq!(examples.len(), 8 * 10 + 600);
//! # Ok(())
//! # }
//! ```

mod config;
mod split;
mod synthesizer;
mod typo;
mod types;

// Public exports
pub use config::{CategorySeeds, CorpusConfig};
pub use split::train_eval_split;
pub use synthesizer::{BLEND_CONNECTOR, CorpusSynthesizer, SynthesisConfig};
pub use typo::{TypoInjector, TypoOp};
pub use types::{Category, LabeledExample};
