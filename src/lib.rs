//! # adaptive-difficulty - assessment difficulty adjustment
//!
//! Keeps an assessment session's question difficulty in step with the
//! candidate's recent answers and, optionally, their detected emotional state.
//!
//! - **Performance** - a fixed-size window of recent answers yields success
//!   rate and consistency; a full window may move difficulty one rank.
//! - **Emotion** - stressful labels ease the session, positive labels may lift
//!   an easy session back up.
//!
//! ## Modules
//!
//! - [`engine`] - [`AdaptiveDifficultyEngine`] and its session snapshot
//! - [`config`] - [`EngineConfig`], threshold table, environment overrides
//! - [`metrics`] - window statistics
//! - [`emotion`] - emotion label classification
//! - [`shared`] - [`SharedEngine`], a lock-guarded handle for multi-threaded hosts
//! - [`types`] - difficulty ladder, records, results
//!
//! ## Example
//!
//! ```rust
//! use adaptive_difficulty::{AdaptiveDifficultyEngine, DifficultyLevel, EngineConfig};
//!
//! let mut engine = AdaptiveDifficultyEngine::new(EngineConfig::default());
//! for id in ["q1", "q2", "q3"] {
//!     engine.record_performance(id, true, Some(12.0));
//! }
//! assert_eq!(engine.current_difficulty(), DifficultyLevel::Hard);
//!
//! engine.update_emotional_state("stressed");
//! assert_eq!(engine.current_difficulty(), DifficultyLevel::Medium);
//! ```

pub mod config;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod shared;
pub mod types;

pub use config::{EngineConfig, SpeedThresholds};
pub use emotion::EmotionCategory;
pub use engine::{AdaptiveDifficultyEngine, EngineSnapshot};
pub use error::{EngineError, EngineResult};
pub use shared::SharedEngine;
pub use types::*;
