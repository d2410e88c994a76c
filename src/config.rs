//! Engine settings, threshold table and environment overrides.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::types::{AdaptationSpeed, DifficultyLevel};

/// Minimum consistency required to escalate.
pub const INCREASE_CONSISTENCY: f64 = 0.7;

/// Consistency at or below which the engine de-escalates regardless of success rate.
pub const DECREASE_CONSISTENCY: f64 = 0.3;

/// Records inspected when a positive emotion may raise an easy session.
pub const POSITIVE_EMOTION_RECENT: usize = 2;

/// Recent success rate a positive emotion needs before escalating.
pub const POSITIVE_EMOTION_SUCCESS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedThresholds {
    pub increase: f64,
    pub decrease: f64,
}

const SLOW: SpeedThresholds = SpeedThresholds { increase: 0.9, decrease: 0.4 };
const NORMAL: SpeedThresholds = SpeedThresholds { increase: 0.8, decrease: 0.5 };
const FAST: SpeedThresholds = SpeedThresholds { increase: 0.7, decrease: 0.6 };

impl AdaptationSpeed {
    pub fn thresholds(&self) -> SpeedThresholds {
        match self {
            Self::Slow => SLOW,
            Self::Normal => NORMAL,
            Self::Fast => FAST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub initial_difficulty: DifficultyLevel,
    pub adaptation_speed: AdaptationSpeed,
    pub emotion_aware: bool,
    pub min_difficulty: DifficultyLevel,
    pub max_difficulty: DifficultyLevel,
    /// Most-recent answers considered for adjustment
    pub performance_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_difficulty: DifficultyLevel::Medium,
            adaptation_speed: AdaptationSpeed::Normal,
            emotion_aware: true,
            min_difficulty: DifficultyLevel::Easy,
            max_difficulty: DifficultyLevel::Hard,
            performance_window: 3,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        override_from(&lookup, "ADAPTIVE_INITIAL_DIFFICULTY", &mut config.initial_difficulty);
        override_from(&lookup, "ADAPTIVE_SPEED", &mut config.adaptation_speed);
        override_from(&lookup, "ADAPTIVE_EMOTION_AWARE", &mut config.emotion_aware);
        override_from(&lookup, "ADAPTIVE_MIN_DIFFICULTY", &mut config.min_difficulty);
        override_from(&lookup, "ADAPTIVE_MAX_DIFFICULTY", &mut config.max_difficulty);
        override_from(&lookup, "ADAPTIVE_PERFORMANCE_WINDOW", &mut config.performance_window);

        config
    }

    pub fn thresholds(&self) -> SpeedThresholds {
        self.adaptation_speed.thresholds()
    }

    /// Rejects inverted bounds, an initial level outside them, and an empty window.
    pub fn validate(&self) -> EngineResult<()> {
        if self.min_difficulty > self.max_difficulty {
            return Err(EngineError::InvalidConfiguration(format!(
                "minDifficulty {} is above maxDifficulty {}",
                self.min_difficulty, self.max_difficulty
            )));
        }
        if !self.contains(self.initial_difficulty) {
            return Err(EngineError::InvalidConfiguration(format!(
                "initialDifficulty {} is outside [{}, {}]",
                self.initial_difficulty, self.min_difficulty, self.max_difficulty
            )));
        }
        if self.performance_window == 0 {
            return Err(EngineError::InvalidConfiguration(
                "performanceWindow must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn contains(&self, level: DifficultyLevel) -> bool {
        level >= self.min_difficulty && level <= self.max_difficulty
    }
}

fn override_from<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T)
where
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => tracing::warn!(key, value = %raw, "ignoring unparseable engine setting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_threshold_table() {
        assert_eq!(AdaptationSpeed::Slow.thresholds(), SpeedThresholds { increase: 0.9, decrease: 0.4 });
        assert_eq!(AdaptationSpeed::Normal.thresholds(), SpeedThresholds { increase: 0.8, decrease: 0.5 });
        assert_eq!(AdaptationSpeed::Fast.thresholds(), SpeedThresholds { increase: 0.7, decrease: 0.6 });
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"adaptationSpeed":"fast","performanceWindow":5}"#).unwrap();

        assert_eq!(config.adaptation_speed, AdaptationSpeed::Fast);
        assert_eq!(config.performance_window, 5);
        assert_eq!(config.initial_difficulty, DifficultyLevel::Medium);
        assert!(config.emotion_aware);
        assert_eq!(config.min_difficulty, DifficultyLevel::Easy);
        assert_eq!(config.max_difficulty, DifficultyLevel::Hard);
    }

    #[test]
    fn test_from_vars_overrides_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = [
            ("ADAPTIVE_SPEED", "slow"),
            ("ADAPTIVE_EMOTION_AWARE", "false"),
            ("ADAPTIVE_PERFORMANCE_WINDOW", "not-a-number"),
            ("ADAPTIVE_MAX_DIFFICULTY", "Medium"),
        ]
        .into_iter()
        .collect();

        let config = EngineConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.adaptation_speed, AdaptationSpeed::Slow);
        assert!(!config.emotion_aware);
        assert_eq!(config.performance_window, 3);
        assert_eq!(config.max_difficulty, DifficultyLevel::Medium);
    }

    #[test]
    fn test_validate() {
        assert!(EngineConfig::default().validate().is_ok());

        let inverted = EngineConfig {
            min_difficulty: DifficultyLevel::Hard,
            max_difficulty: DifficultyLevel::Easy,
            ..Default::default()
        };
        assert!(matches!(inverted.validate(), Err(EngineError::InvalidConfiguration(_))));

        let outside = EngineConfig {
            initial_difficulty: DifficultyLevel::Hard,
            max_difficulty: DifficultyLevel::Medium,
            ..Default::default()
        };
        assert!(outside.validate().is_err());

        let empty_window = EngineConfig {
            performance_window: 0,
            ..Default::default()
        };
        assert!(empty_window.validate().is_err());
    }
}
