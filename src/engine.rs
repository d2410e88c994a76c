//! Adaptive Difficulty Engine
//!
//! Adjusts question difficulty one rank at a time from two inputs:
//! - a rolling window of answered questions (success rate and consistency)
//! - an optional emotion label supplied by an external detector
//!
//! The engine is a plain synchronous state machine. It performs unsynchronised
//! read-modify-write on its history and log, so a host that drives one engine
//! from several threads must serialise access itself, e.g. through
//! [`SharedEngine`](crate::SharedEngine).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::{
    EngineConfig, DECREASE_CONSISTENCY, INCREASE_CONSISTENCY, POSITIVE_EMOTION_RECENT,
    POSITIVE_EMOTION_SUCCESS,
};
use crate::emotion::{EmotionCategory, NEUTRAL};
use crate::error::EngineResult;
use crate::metrics::{compute_metrics, recent_success_rate};
use crate::types::{
    AdjustmentRecord, AdjustmentTrigger, DifficultyLevel, EmotionUpdate, PerformanceMetrics,
    PerformanceRecord, RecordOutcome,
};

/// Read-only view of an engine for session summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub config: EngineConfig,
    pub current_difficulty: DifficultyLevel,
    pub emotional_state: String,
    pub performance_history: Vec<PerformanceRecord>,
    pub adjustments: Vec<AdjustmentRecord>,
}

#[derive(Debug, Clone)]
pub struct AdaptiveDifficultyEngine {
    config: EngineConfig,
    window: usize,
    current: DifficultyLevel,
    history: VecDeque<PerformanceRecord>,
    emotional_state: String,
    adjustments: Vec<AdjustmentRecord>,
}

impl AdaptiveDifficultyEngine {
    /// Builds an engine without validating `config`. A zero window is treated as 1.
    pub fn new(config: EngineConfig) -> Self {
        let window = config.performance_window.max(1);
        Self {
            current: config.initial_difficulty,
            history: VecDeque::with_capacity(window + 1),
            emotional_state: NEUTRAL.to_string(),
            adjustments: Vec::new(),
            window,
            config,
        }
    }

    pub fn try_new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn record_performance(
        &mut self,
        question_id: impl Into<String>,
        is_correct: bool,
        time_spent_seconds: Option<f64>,
    ) -> RecordOutcome {
        let record = PerformanceRecord {
            question_id: question_id.into(),
            is_correct,
            time_spent_seconds: time_spent_seconds.filter(|t| t.is_finite() && *t >= 0.0),
            difficulty: self.current,
            timestamp: now_millis(),
        };
        self.history.push_back(record);
        while self.history.len() > self.window {
            self.history.pop_front();
        }

        let metrics = compute_metrics(&self.history);
        if let Some(last) = self.history.back() {
            tracing::debug!(
                question_id = %last.question_id,
                is_correct,
                sample_size = metrics.sample_size,
                success_rate = metrics.success_rate,
                consistency = metrics.consistency,
                "answer recorded"
            );
        }

        if metrics.sample_size >= self.window {
            self.adjust_for_performance(metrics);
        }

        RecordOutcome {
            current_difficulty: self.current,
            performance_metrics: metrics,
            adjustments_made: self.adjustments.len(),
        }
    }

    fn adjust_for_performance(&mut self, metrics: PerformanceMetrics) {
        let thresholds = self.config.thresholds();

        let target = if metrics.success_rate >= thresholds.increase
            && metrics.consistency >= INCREASE_CONSISTENCY
        {
            self.current.harder(self.config.max_difficulty)
        } else if metrics.success_rate <= thresholds.decrease
            || metrics.consistency <= DECREASE_CONSISTENCY
        {
            self.current.easier(self.config.min_difficulty)
        } else {
            return;
        };

        self.apply(target, AdjustmentTrigger::Performance { metrics });
    }

    /// Stores `emotion` and, on an emotion-aware engine, reacts to it.
    /// Returns `None` when emotion awareness is disabled.
    pub fn update_emotional_state(&mut self, emotion: impl Into<String>) -> Option<EmotionUpdate> {
        self.emotional_state = emotion.into();

        if !self.config.emotion_aware {
            return None;
        }

        match EmotionCategory::classify(&self.emotional_state) {
            EmotionCategory::Stressful => {
                if self.current != self.config.min_difficulty {
                    let target = self.current.easier(self.config.min_difficulty);
                    self.apply_emotion(target);
                }
            }
            EmotionCategory::Positive => {
                if self.current == DifficultyLevel::Easy {
                    let recent = recent_success_rate(&self.history, POSITIVE_EMOTION_RECENT);
                    if recent.is_some_and(|rate| rate >= POSITIVE_EMOTION_SUCCESS) {
                        let target = self.current.harder(self.config.max_difficulty);
                        self.apply_emotion(target);
                    }
                }
            }
            EmotionCategory::Neutral => {}
        }

        Some(EmotionUpdate {
            current_difficulty: self.current,
            emotional_state: self.emotional_state.clone(),
        })
    }

    fn apply_emotion(&mut self, target: DifficultyLevel) {
        let emotion = self.emotional_state.clone();
        self.apply(target, AdjustmentTrigger::Emotion { emotion });
    }

    fn apply(&mut self, target: DifficultyLevel, trigger: AdjustmentTrigger) {
        if target == self.current {
            tracing::debug!(
                level = %self.current,
                reason = trigger.reason(),
                "adjustment blocked at difficulty bound"
            );
            return;
        }

        tracing::info!(from = %self.current, to = %target, reason = trigger.reason(), "difficulty adjusted");
        self.adjustments.push(AdjustmentRecord {
            from: self.current,
            to: target,
            trigger,
            timestamp: now_millis(),
        });
        self.current = target;
    }

    pub fn current_difficulty(&self) -> DifficultyLevel {
        self.current
    }

    pub fn emotional_state(&self) -> &str {
        &self.emotional_state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn adjustment_count(&self) -> usize {
        self.adjustments.len()
    }

    /// Oldest first, at most `performance_window` records.
    pub fn performance_history(&self) -> Vec<PerformanceRecord> {
        self.history.iter().cloned().collect()
    }

    pub fn adjustments_history(&self) -> Vec<AdjustmentRecord> {
        self.adjustments.clone()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config.clone(),
            current_difficulty: self.current,
            emotional_state: self.emotional_state.clone(),
            performance_history: self.performance_history(),
            adjustments: self.adjustments_history(),
        }
    }

    /// Clears history, log and emotion. Difficulty returns to `initial`, or to
    /// the configured initial level when `None`.
    pub fn reset(&mut self, initial: Option<DifficultyLevel>) {
        self.history.clear();
        self.adjustments.clear();
        self.emotional_state = NEUTRAL.to_string();
        self.current = initial.unwrap_or(self.config.initial_difficulty);
        tracing::info!(level = %self.current, "engine reset");
    }

    /// [`reset`](Self::reset) from a textual level. Unknown labels leave the engine untouched.
    pub fn reset_to_label(&mut self, label: &str) -> EngineResult<()> {
        let level = label.parse()?;
        self.reset(Some(level));
        Ok(())
    }
}

impl Default for AdaptiveDifficultyEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
