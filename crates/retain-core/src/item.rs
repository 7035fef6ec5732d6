use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_FAMILIARITY, MIN_FAMILIARITY, REVIEW_HISTORY_CAP};

/// A reviewable item as persisted by the host store.
///
/// Serialized in camelCase to match the store's JSON records. The engine
/// never mutates an item in place; updates go through [`ReviewItem::with_review`]
/// or the caller's own bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    /// Store-assigned identifier, stable for the item's lifetime.
    pub id: u64,
    /// Mastery score in [0.0, 100.0].
    pub familiarity_score: f64,
    /// Completed review count.
    pub times_reviewed: u32,
    /// RFC 3339 review timestamps, oldest first, capped at 10 entries.
    /// Legacy records may omit the field or carry malformed entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_reviews: Vec<String>,
}

impl ReviewItem {
    /// A fresh, never-reviewed item.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            familiarity_score: MIN_FAMILIARITY,
            times_reviewed: 0,
            recent_reviews: Vec::new(),
        }
    }

    /// The most recent review timestamp, if any.
    pub fn last_review(&self) -> Option<&str> {
        self.recent_reviews.last().map(String::as_str)
    }

    /// A copy of this item after one completed review: score replaced
    /// (clamped to the familiarity domain), count incremented, timestamp
    /// appended with the history cap applied.
    pub fn with_review(&self, new_score: f64, reviewed_at: DateTime<Utc>) -> ReviewItem {
        let mut recent_reviews = self.recent_reviews.clone();
        recent_reviews.push(reviewed_at.to_rfc3339());
        if recent_reviews.len() > REVIEW_HISTORY_CAP {
            let excess = recent_reviews.len() - REVIEW_HISTORY_CAP;
            recent_reviews.drain(..excess);
        }

        ReviewItem {
            id: self.id,
            familiarity_score: new_score.clamp(MIN_FAMILIARITY, MAX_FAMILIARITY),
            times_reviewed: self.times_reviewed.saturating_add(1),
            recent_reviews,
        }
    }
}
