use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("no club pair reaches the target")]
    NoFeasibleStrategy,

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            EngineError::Deserialization(err.to_string())
        } else {
            EngineError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
