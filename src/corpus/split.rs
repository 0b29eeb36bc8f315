//! Train/evaluation split.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::corpus::types::LabeledExample;
use crate::error::{Result, SymptomError};

/// Shuffle `examples` with `rng` and cut them into a training and an
/// evaluation part.
///
/// The first `floor(train_ratio * n)` shuffled examples go to training, the
/// rest to evaluation. `train_ratio` must lie in `(0, 1]`.
pub fn train_eval_split<R: Rng + ?Sized>(
    examples: Vec<LabeledExample>,
    train_ratio: f64,
    rng: &mut R,
) -> Result<(Vec<LabeledExample>, Vec<LabeledExample>)> {
    if !(train_ratio > 0.0 && train_ratio <= 1.0) {
        return Err(SymptomError::invalid_config(format!(
            "train_ratio must be within (0, 1], got {train_ratio}"
        )));
    }

    let mut order: Vec<usize> = (0..examples.len()).collect();
    order.shuffle(rng);
    let cut = (train_ratio * examples.len() as f64).floor() as usize;

    let mut slots: Vec<Option<LabeledExample>> = examples.into_iter().map(Some).collect();
    let mut take = |indices: &[usize]| -> Vec<LabeledExample> {
        indices.iter().filter_map(|&i| slots[i].take()).collect()
    };

    let train = take(&order[..cut]);
    let eval = take(&order[cut..]);
    Ok((train, eval))
}
