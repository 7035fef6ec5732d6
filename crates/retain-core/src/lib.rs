//! # retain-core
//!
//! Foundation crate for the Retain review engine.
//! Defines the reviewable item record, the rating scale, errors, config,
//! and constants. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod item;
pub mod rating;

// Re-export the most commonly used types at the crate root.
pub use config::ReviewConfig;
pub use errors::{EngineError, EngineResult};
pub use item::ReviewItem;
pub use rating::Rating;
