use chrono::{DateTime, Utc};
use tracing::warn;

use retain_core::constants::{
    MAX_SELECTION_WEIGHT, MIN_SELECTION_WEIGHT, NEUTRAL_RECENCY_SCORE,
};

/// Hourly exponential decay constant.
/// Calibration: ~24h → ≈7.9, ~72h → ≈5.0, ~168h (7 days) → ≈1.9.
const DECAY_PER_HOUR: f64 = 0.01;

/// Recency score from a review history, using only the last timestamp.
///
/// Formula: `10.0 × e^(-0.01 × hoursElapsed)`, clamped to [0.1, 10.0].
/// Total: empty or malformed history degrades to the neutral score (5.0)
/// with a warning, never an error. A timestamp in the future of `now`
/// (clock skew) scores 10.0.
pub fn calculate(recent_reviews: &[String], now: DateTime<Utc>) -> f64 {
    let raw = match recent_reviews.last() {
        Some(raw) => raw,
        None => return NEUTRAL_RECENCY_SCORE,
    };

    let last = match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(&Utc),
        Err(err) => {
            warn!(timestamp = %raw, %err, "unparseable review timestamp, using neutral recency");
            return NEUTRAL_RECENCY_SCORE;
        }
    };

    if last > now {
        warn!(timestamp = %raw, "review timestamp in the future, treating as maximally recent");
        return MAX_SELECTION_WEIGHT;
    }

    let hours_elapsed = (now - last).num_seconds() as f64 / 3600.0;

    (MAX_SELECTION_WEIGHT * (-DECAY_PER_HOUR * hours_elapsed).exp())
        .clamp(MIN_SELECTION_WEIGHT, MAX_SELECTION_WEIGHT)
}
