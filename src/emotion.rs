//! Emotion label classification.

use serde::{Deserialize, Serialize};

pub const NEUTRAL: &str = "neutral";

const STRESSFUL: [&str; 3] = ["stressed", "anxious", "angry"];
const POSITIVE: [&str; 2] = ["happy", "calm"];

/// How an emotion label bears on difficulty. Labels are open-ended and matched
/// exactly; anything unrecognised is `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Stressful,
    Positive,
    Neutral,
}

impl EmotionCategory {
    pub fn classify(label: &str) -> Self {
        if STRESSFUL.contains(&label) {
            Self::Stressful
        } else if POSITIVE.contains(&label) {
            Self::Positive
        } else {
            Self::Neutral
        }
    }
}
