use retain_core::errors::{EngineError, EngineResult};

/// Buffered contribution band: each signal keeps between 20% and 80% of the
/// blend regardless of the slider position.
const MIN_CONTRIBUTION: f64 = 0.2;
const MAX_CONTRIBUTION: f64 = 0.8;

/// Blend a spaced-repetition weight and a recency score.
///
/// `recency_weight` 0.0 → recency gets 20%, SR gets 80%;
/// 0.5 → even split; 1.0 → recency gets 80%, SR gets 20%.
pub fn calculate(sr_score: f64, recency_score: f64, recency_weight: f64) -> EngineResult<f64> {
    if !(0.0..=1.0).contains(&recency_weight) {
        return Err(EngineError::invalid(format!(
            "recency weight {recency_weight} outside [0.0, 1.0]"
        )));
    }

    let recency_share =
        MIN_CONTRIBUTION + recency_weight * (MAX_CONTRIBUTION - MIN_CONTRIBUTION);
    let sr_share = 1.0 - recency_share;

    Ok(sr_score * sr_share + recency_score * recency_share)
}
