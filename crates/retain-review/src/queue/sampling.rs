use rand::seq::index::sample_weighted;
use rand::Rng;

use retain_core::errors::{EngineError, EngineResult};
use retain_core::item::ReviewItem;

/// Weighted sampling without replacement: draw up to `quota` items with
/// probability proportional to weight among the remaining candidates.
///
/// Weights must be finite and positive; the selection-weight and blend
/// functions guarantee that.
pub fn draw<'a, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[&'a ReviewItem],
    weights: &[f64],
    quota: usize,
) -> EngineResult<Vec<&'a ReviewItem>> {
    debug_assert_eq!(candidates.len(), weights.len());

    let amount = quota.min(candidates.len());
    if amount == 0 {
        return Ok(Vec::new());
    }

    let picked = sample_weighted(rng, candidates.len(), |i| weights[i], amount)
        .map_err(|err| EngineError::invalid(format!("weighted draw failed: {err}")))?;

    Ok(picked.into_iter().map(|i| candidates[i]).collect())
}
