/// Retain engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Familiarity score domain. 0 = unknown, 100 = mastered.
pub const MIN_FAMILIARITY: f64 = 0.0;
pub const MAX_FAMILIARITY: f64 = 100.0;

/// Selection weight bounds. Recency scores share the same range so the two
/// signals can be blended directly.
pub const MIN_SELECTION_WEIGHT: f64 = 0.1;
pub const MAX_SELECTION_WEIGHT: f64 = 10.0;

/// Recency score for items with no usable review history.
pub const NEUTRAL_RECENCY_SCORE: f64 = 5.0;

/// Maximum review timestamps retained per item. Oldest dropped on overflow.
pub const REVIEW_HISTORY_CAP: usize = 10;
