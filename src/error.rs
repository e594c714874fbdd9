//! Error types for nbn-dummy-package

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, HelloError>;

#[derive(Debug, Error)]
pub enum HelloError {
    #[error("Overflow error: {a} + {b} does not fit in a 64-bit integer")]
    Overflow { a: i64, b: i64 },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl HelloError {
    pub fn overflow(a: i64, b: i64) -> Self {
        Self::Overflow { a, b }
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
