use chrono::{DateTime, Duration, Utc};

use retain_core::item::ReviewItem;

/// Most recent parseable review timestamp, if any.
pub fn last_review_time(item: &ReviewItem) -> Option<DateTime<Utc>> {
    let raw = item.recent_reviews.last()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Whether the item's last review falls within `window_days` of `now`.
///
/// Missing or malformed history counts as not recent. A future timestamp
/// counts as recent.
pub fn reviewed_recently(item: &ReviewItem, now: DateTime<Utc>, window_days: i64) -> bool {
    match last_review_time(item) {
        Some(last) => now - last <= Duration::days(window_days),
        None => false,
    }
}

/// Split the pool into (recent, other) by the recency window.
pub fn split<'a>(
    pool: &'a [ReviewItem],
    now: DateTime<Utc>,
    window_days: i64,
) -> (Vec<&'a ReviewItem>, Vec<&'a ReviewItem>) {
    let mut recent = Vec::new();
    let mut other = Vec::new();
    for item in pool {
        if reviewed_recently(item, now, window_days) {
            recent.push(item);
        } else {
            other.push(item);
        }
    }
    (recent, other)
}

/// Quota split for a queue of `count` items.
///
/// Starts from `recent_quota = round(count × recency_weight)` and shrinks a
/// quota to its partition size, re-growing the opposite quota (bounded by
/// its own partition) so the total stays at `count`. Callers guarantee
/// `count < recent_len + other_len` and `recency_weight ∈ [0, 1]`.
pub fn quotas(
    count: usize,
    recency_weight: f64,
    recent_len: usize,
    other_len: usize,
) -> (usize, usize) {
    let mut recent_quota = (count as f64 * recency_weight).round() as usize;
    let mut other_quota = count - recent_quota;

    if recent_len < recent_quota {
        recent_quota = recent_len;
        other_quota = count - recent_quota;
    }
    if other_len < other_quota {
        other_quota = other_len;
        recent_quota = (count - other_quota).min(recent_len);
    }

    (recent_quota, other_quota)
}
