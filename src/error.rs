//! Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("Failed to lock countdown state: {0}")]
    StateLock(String),

    #[error("Failed to schedule ticks: {0}")]
    Ticker(String),
}

pub type Result<T> = std::result::Result<T, CountdownError>;

impl<T> From<std::sync::PoisonError<T>> for CountdownError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CountdownError::StateLock(e.to_string())
    }
}
