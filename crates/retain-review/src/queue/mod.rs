//! Queue building: partition → quotas → weighted draw → shuffle.

pub mod partition;
pub mod sampling;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use retain_core::errors::{EngineError, EngineResult};
use retain_core::item::ReviewItem;

use crate::scoring::{blend, recency, weight};

/// Build a review queue of up to `count` items from `pool` (quota path).
///
/// The pool is split into recently-reviewed and other items;
/// `recency_weight` sets the share of the queue drawn from the recent
/// partition. Inside each partition the draw is weighted by the raw
/// selection weight. The combined result is shuffled so queue order
/// carries no priority signal.
pub fn select<R: Rng + ?Sized>(
    pool: &[ReviewItem],
    count: usize,
    recency_weight: f64,
    window_days: i64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> EngineResult<Vec<ReviewItem>> {
    validate_recency_weight(recency_weight)?;

    if pool.is_empty() {
        return Ok(Vec::new());
    }
    if count >= pool.len() {
        let mut all = pool.to_vec();
        all.shuffle(rng);
        return Ok(all);
    }

    let (recent, other) = partition::split(pool, now, window_days);
    let (recent_quota, other_quota) =
        partition::quotas(count, recency_weight, recent.len(), other.len());
    debug!(
        recent = recent.len(),
        other = other.len(),
        recent_quota,
        other_quota,
        "partitioned review pool"
    );

    let mut selected = draw_by_selection_weight(rng, &recent, recent_quota)?;
    selected.extend(draw_by_selection_weight(rng, &other, other_quota)?);

    let mut queue: Vec<ReviewItem> = selected.into_iter().cloned().collect();
    queue.shuffle(rng);
    Ok(queue)
}

/// Build a review queue via a single un-partitioned draw over blended
/// scores (alternate path).
///
/// Each item's weight blends its selection weight with its recency score
/// per `recency_weight`; quota arithmetic is not involved.
pub fn select_blended<R: Rng + ?Sized>(
    pool: &[ReviewItem],
    count: usize,
    recency_weight: f64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> EngineResult<Vec<ReviewItem>> {
    validate_recency_weight(recency_weight)?;

    if pool.is_empty() {
        return Ok(Vec::new());
    }
    if count >= pool.len() {
        let mut all = pool.to_vec();
        all.shuffle(rng);
        return Ok(all);
    }

    let candidates: Vec<&ReviewItem> = pool.iter().collect();
    let weights = candidates
        .iter()
        .map(|item| {
            let sr = weight::calculate(item.familiarity_score, item.times_reviewed)?;
            let rec = recency::calculate(&item.recent_reviews, now);
            blend::calculate(sr, rec, recency_weight)
        })
        .collect::<EngineResult<Vec<f64>>>()?;

    let mut queue: Vec<ReviewItem> = sampling::draw(rng, &candidates, &weights, count)?
        .into_iter()
        .cloned()
        .collect();
    queue.shuffle(rng);
    Ok(queue)
}

fn draw_by_selection_weight<'a, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[&'a ReviewItem],
    quota: usize,
) -> EngineResult<Vec<&'a ReviewItem>> {
    let weights = candidates
        .iter()
        .map(|item| weight::calculate(item.familiarity_score, item.times_reviewed))
        .collect::<EngineResult<Vec<f64>>>()?;
    sampling::draw(rng, candidates, &weights, quota)
}

fn validate_recency_weight(recency_weight: f64) -> EngineResult<()> {
    if !(0.0..=1.0).contains(&recency_weight) {
        return Err(EngineError::invalid(format!(
            "recency weight {recency_weight} outside [0.0, 1.0]"
        )));
    }
    Ok(())
}
