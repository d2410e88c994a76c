//! Common Types
//!
//! Difficulty ladder, answer records, metrics and the adjustment log shared
//! by the engine and its callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// ==================== Difficulty ====================

/// Question difficulty, ordered `Easy < Medium < Hard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyLevel {
    /// Every level, lowest rank first.
    pub const ALL: [DifficultyLevel; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Ordinal rank: easy=1, medium=2, hard=3.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.rank() == rank)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// One rank up, or `self` when already at `ceiling` or the top of the ladder.
    pub fn harder(&self, ceiling: DifficultyLevel) -> Self {
        match Self::from_rank(self.rank() + 1) {
            Some(next) if next.rank() <= ceiling.rank() => next,
            _ => *self,
        }
    }

    /// One rank down, or `self` when already at `floor` or the bottom of the ladder.
    pub fn easier(&self, floor: DifficultyLevel) -> Self {
        match Self::from_rank(self.rank().saturating_sub(1)) {
            Some(prev) if prev.rank() >= floor.rank() => prev,
            _ => *self,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

// ==================== Adaptation Speed ====================

/// Selects the success-rate thresholds used for escalation and de-escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum AdaptationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AdaptationSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        }
    }
}

impl fmt::Display for AdaptationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdaptationSpeed {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "normal" => Ok(Self::Normal),
            "fast" => Ok(Self::Fast),
            _ => Err(EngineError::UnknownAdaptationSpeed(s.to_string())),
        }
    }
}

// ==================== Records ====================

/// One answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub question_id: String,
    pub is_correct: bool,
    /// Seconds spent answering, when the caller measured it
    pub time_spent_seconds: Option<f64>,
    /// Difficulty the question was presented at
    pub difficulty: DifficultyLevel,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

/// Aggregates over the current performance window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Correct answers / answers in window
    pub success_rate: f64,
    /// Mean time over records that carry a time, `None` if none do
    pub avg_time_spent: Option<f64>,
    /// `1 - min(1, 2 * stddev)` of correctness; 1.0 is uniform
    pub consistency: f64,
    pub sample_size: usize,
}

/// What caused an adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "lowercase")]
pub enum AdjustmentTrigger {
    Performance { metrics: PerformanceMetrics },
    Emotion { emotion: String },
}

impl AdjustmentTrigger {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Performance { .. } => "performance",
            Self::Emotion { .. } => "emotion",
        }
    }
}

/// A difficulty change that was actually applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentRecord {
    pub from: DifficultyLevel,
    pub to: DifficultyLevel,
    #[serde(flatten)]
    pub trigger: AdjustmentTrigger,
    pub timestamp: i64,
}

// ==================== Operation Results ====================

/// Result of [`record_performance`](crate::AdaptiveDifficultyEngine::record_performance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOutcome {
    pub current_difficulty: DifficultyLevel,
    pub performance_metrics: PerformanceMetrics,
    /// Adjustments logged since construction or the last reset
    pub adjustments_made: usize,
}

/// Result of an emotion update on an emotion-aware engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionUpdate {
    pub current_difficulty: DifficultyLevel,
    pub emotional_state: String,
}
