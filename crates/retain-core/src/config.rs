use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// Default values for [`ReviewConfig`].
pub mod defaults {
    /// Balance between spaced-repetition and recency signals.
    pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.5;
    /// Days within which a review counts as recent.
    pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 7;
}

/// Review engine configuration.
///
/// Hosts embed this in their persisted settings; unknown or missing fields
/// fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewConfig {
    /// Share of the queue drawn from recently reviewed items, in [0.0, 1.0].
    /// 0.0 = pure spaced repetition, 1.0 = favor recent items.
    pub recency_weight: f64,
    /// Window that counts a review as "recent" for queue partitioning.
    pub recent_window_days: i64,
}

impl ReviewConfig {
    /// Check that every field is inside its documented domain.
    pub fn validate(&self) -> EngineResult<()> {
        if !(0.0..=1.0).contains(&self.recency_weight) {
            return Err(EngineError::invalid(format!(
                "recency weight {} outside [0.0, 1.0]",
                self.recency_weight
            )));
        }
        if self.recent_window_days < 1 {
            return Err(EngineError::invalid(format!(
                "recent window {} must be at least 1 day",
                self.recent_window_days
            )));
        }
        Ok(())
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            recency_weight: defaults::DEFAULT_RECENCY_WEIGHT,
            recent_window_days: defaults::DEFAULT_RECENT_WINDOW_DAYS,
        }
    }
}
