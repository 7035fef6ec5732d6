//! # retain-review
//!
//! Review-selection engine for spaced-repetition learning.
//! Computes selection weights and recency scores, updates familiarity after
//! graded reviews, and builds bounded, duplicate-free review queues via
//! weighted sampling without replacement.

pub mod engine;
pub mod familiarity;
pub mod queue;
pub mod scoring;

pub use engine::ReviewEngine;
