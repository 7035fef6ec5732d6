use retain_core::constants::{
    MAX_FAMILIARITY, MAX_SELECTION_WEIGHT, MIN_FAMILIARITY, MIN_SELECTION_WEIGHT,
};
use retain_core::errors::{EngineError, EngineResult};

/// Exponential decay constant applied to the familiarity score.
const FAMILIARITY_DECAY_RATE: f64 = 0.05;

/// Flat weight multiplier for items that have never been reviewed.
const UNREVIEWED_BONUS: f64 = 2.0;

/// Selection weight from familiarity and review count.
///
/// Formula: `10.0 × e^(-0.05 × familiarity)`, multiplied by the
/// review-count bonus, clamped to [0.1, 10.0].
///
/// A familiarity gap of 20 points shrinks the base weight by `e^(-1)`,
/// more than the bonus can make up, so familiarity dominates the ordering.
pub fn calculate(familiarity_score: f64, times_reviewed: u32) -> EngineResult<f64> {
    if !(MIN_FAMILIARITY..=MAX_FAMILIARITY).contains(&familiarity_score) {
        return Err(EngineError::invalid(format!(
            "familiarity score {familiarity_score} outside [{MIN_FAMILIARITY}, {MAX_FAMILIARITY}]"
        )));
    }

    let familiarity_weight =
        MAX_SELECTION_WEIGHT * (-FAMILIARITY_DECAY_RATE * familiarity_score).exp();

    Ok((familiarity_weight * review_bonus(times_reviewed))
        .clamp(MIN_SELECTION_WEIGHT, MAX_SELECTION_WEIGHT))
}

/// Review-count bonus factor.
///
/// Formula: `2.0` when never reviewed, else `1 + max(0, 1 − log10(n + 1))`.
/// Range: 1.0 – 2.0, decreasing toward 1.0 as the count grows.
pub fn review_bonus(times_reviewed: u32) -> f64 {
    if times_reviewed == 0 {
        UNREVIEWED_BONUS
    } else {
        1.0 + (1.0 - (times_reviewed as f64 + 1.0).log10()).max(0.0)
    }
}
