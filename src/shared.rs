//! Cloneable handle that serialises access to one engine.
//!
//! Every call takes the lock for its whole read-modify-write, so two UI handlers
//! racing on the same session never interleave history updates.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::EngineConfig;
use crate::engine::{AdaptiveDifficultyEngine, EngineSnapshot};
use crate::error::EngineResult;
use crate::types::{AdjustmentRecord, DifficultyLevel, EmotionUpdate, PerformanceRecord, RecordOutcome};

#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<AdaptiveDifficultyEngine>>,
}

impl SharedEngine {
    pub fn new(engine: AdaptiveDifficultyEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn try_from_config(config: EngineConfig) -> EngineResult<Self> {
        AdaptiveDifficultyEngine::try_new(config).map(Self::new)
    }

    pub fn record_performance(
        &self,
        question_id: impl Into<String>,
        is_correct: bool,
        time_spent_seconds: Option<f64>,
    ) -> RecordOutcome {
        self.inner
            .lock()
            .record_performance(question_id, is_correct, time_spent_seconds)
    }

    pub fn update_emotional_state(&self, emotion: impl Into<String>) -> Option<EmotionUpdate> {
        self.inner.lock().update_emotional_state(emotion)
    }

    pub fn current_difficulty(&self) -> DifficultyLevel {
        self.inner.lock().current_difficulty()
    }

    pub fn performance_history(&self) -> Vec<PerformanceRecord> {
        self.inner.lock().performance_history()
    }

    pub fn adjustments_history(&self) -> Vec<AdjustmentRecord> {
        self.inner.lock().adjustments_history()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.inner.lock().snapshot()
    }

    pub fn reset(&self, initial: Option<DifficultyLevel>) {
        self.inner.lock().reset(initial);
    }

    pub fn reset_to_label(&self, label: &str) -> EngineResult<()> {
        self.inner.lock().reset_to_label(label)
    }

    /// Runs `f` with exclusive access, for multi-step sequences that must not interleave.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut AdaptiveDifficultyEngine) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<AdaptiveDifficultyEngine> for SharedEngine {
    fn from(engine: AdaptiveDifficultyEngine) -> Self {
        Self::new(engine)
    }
}
