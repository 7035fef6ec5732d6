//! ReviewEngine: orchestrates scoring and queue building per config.

use chrono::{DateTime, Utc};
use rand::Rng;

use retain_core::config::ReviewConfig;
use retain_core::errors::EngineResult;
use retain_core::item::ReviewItem;
use retain_core::rating::Rating;

use crate::familiarity;
use crate::queue;
use crate::scoring::{blend, recency, weight};

/// Stateless review engine. Holds only configuration values, so one
/// instance can be shared freely across threads; synchronizing item
/// read-update-persist cycles remains the store's job.
pub struct ReviewEngine {
    config: ReviewConfig,
}

impl ReviewEngine {
    /// Engine with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReviewConfig::default(),
        }
    }

    /// Engine with explicit configuration. Fails when a field is outside
    /// its documented domain.
    pub fn with_config(config: ReviewConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Selection weight for one item.
    pub fn selection_weight(&self, item: &ReviewItem) -> EngineResult<f64> {
        weight::calculate(item.familiarity_score, item.times_reviewed)
    }

    /// Blended weight (selection weight × recency score) for one item.
    pub fn blended_weight(&self, item: &ReviewItem, now: DateTime<Utc>) -> EngineResult<f64> {
        let sr = weight::calculate(item.familiarity_score, item.times_reviewed)?;
        let rec = recency::calculate(&item.recent_reviews, now);
        blend::calculate(sr, rec, self.config.recency_weight)
    }

    /// New familiarity score after a graded review. The caller persists the
    /// result and the review bookkeeping.
    pub fn next_familiarity(
        &self,
        current_score: f64,
        rating: Rating,
        times_reviewed: u32,
    ) -> EngineResult<f64> {
        familiarity::next_score(current_score, rating, times_reviewed)
    }

    /// Apply a graded review to an item: updated score, incremented count,
    /// timestamp appended with the history cap. Pure; returns a copy.
    pub fn review(
        &self,
        item: &ReviewItem,
        rating: Rating,
        reviewed_at: DateTime<Utc>,
    ) -> EngineResult<ReviewItem> {
        let score = familiarity::next_score(item.familiarity_score, rating, item.times_reviewed)?;
        Ok(item.with_review(score, reviewed_at))
    }

    /// Build a review queue with ambient randomness and the current time.
    pub fn select(&self, pool: &[ReviewItem], count: usize) -> EngineResult<Vec<ReviewItem>> {
        self.select_at(pool, count, Utc::now(), &mut rand::thread_rng())
    }

    /// Queue building with injected clock and randomness (quota path).
    pub fn select_at<R: Rng + ?Sized>(
        &self,
        pool: &[ReviewItem],
        count: usize,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> EngineResult<Vec<ReviewItem>> {
        queue::select(
            pool,
            count,
            self.config.recency_weight,
            self.config.recent_window_days,
            now,
            rng,
        )
    }

    /// Blended-path queue building with ambient randomness.
    pub fn select_blended(
        &self,
        pool: &[ReviewItem],
        count: usize,
    ) -> EngineResult<Vec<ReviewItem>> {
        self.select_blended_at(pool, count, Utc::now(), &mut rand::thread_rng())
    }

    /// Blended-path queue building with injected clock and randomness:
    /// one un-partitioned weighted draw over blended scores.
    pub fn select_blended_at<R: Rng + ?Sized>(
        &self,
        pool: &[ReviewItem],
        count: usize,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> EngineResult<Vec<ReviewItem>> {
        queue::select_blended(pool, count, self.config.recency_weight, now, rng)
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new()
    }
}
