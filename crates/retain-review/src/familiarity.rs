//! Familiarity updates after graded reviews.

use retain_core::constants::{MAX_FAMILIARITY, MIN_FAMILIARITY};
use retain_core::errors::{EngineError, EngineResult};
use retain_core::rating::Rating;

/// Gains shrink as the score rises: rate 1.0 at score 0, 1/3 at score 100.
const GAIN_DAMPING: f64 = 150.0;

/// Losses grow as the score rises: rate 1.0 at score 0, 1.5 at score 100.
const LAPSE_AMPLIFIER: f64 = 200.0;

/// New familiarity score after a graded review.
///
/// The rating's base delta is scaled by a learning rate that is asymmetric
/// by sign: reinforcement slows down on well-known items, while a lapse on
/// a well-known item costs more. Result clamped to [0.0, 100.0].
///
/// `times_reviewed` is part of the review report contract; the current
/// formula derives the learning rate from the score alone.
pub fn next_score(
    current_score: f64,
    rating: Rating,
    _times_reviewed: u32,
) -> EngineResult<f64> {
    if !(MIN_FAMILIARITY..=MAX_FAMILIARITY).contains(&current_score) {
        return Err(EngineError::invalid(format!(
            "familiarity score {current_score} outside [{MIN_FAMILIARITY}, {MAX_FAMILIARITY}]"
        )));
    }

    let base_delta = rating.base_delta();
    let learning_rate = if base_delta > 0.0 {
        1.0 - current_score / GAIN_DAMPING
    } else {
        1.0 + current_score / LAPSE_AMPLIFIER
    };

    Ok((current_score + base_delta * learning_rate).clamp(MIN_FAMILIARITY, MAX_FAMILIARITY))
}
