
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordRankError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Serialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation Error: {0}")]
    Validation(String),
}

pub type WrResult<T> = Result<T, WordRankError>;
