use std::sync::Once;

use adaptive_difficulty::{AdaptiveDifficultyEngine, DifficultyLevel, EngineConfig};
use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

pub fn engine_at(initial: DifficultyLevel) -> AdaptiveDifficultyEngine {
    init_tracing();
    AdaptiveDifficultyEngine::new(EngineConfig {
        initial_difficulty: initial,
        ..Default::default()
    })
}

pub fn answer_all(engine: &mut AdaptiveDifficultyEngine, answers: &[bool]) {
    for (i, &correct) in answers.iter().enumerate() {
        engine.record_performance(format!("q{}", i), correct, None);
    }
}
