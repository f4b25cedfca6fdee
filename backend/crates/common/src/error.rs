use thiserror::Error;

#[derive(Debug, Error)]
pub enum WardwatchError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type WardwatchResult<T> = Result<T, WardwatchError>;
