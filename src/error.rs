#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("unknown difficulty level: {0:?}")]
    UnknownDifficulty(String),
    #[error("unknown adaptation speed: {0:?}")]
    UnknownAdaptationSpeed(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
