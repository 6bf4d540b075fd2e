//! Jumu Error Types
//!
//! Centralized error handling. Input rejections and transport failures are
//! reported as session outcomes, not through this type.

use thiserror::Error;

/// Central error type for Jumu
#[derive(Error, Debug)]
pub enum JumuError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for Jumu operations
pub type JumuResult<T> = Result<T, JumuError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for JumuError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        JumuError::Lock(err.to_string())
    }
}
