use thiserror::Error;

use super::Locale;

/// Errors that can occur during backend operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Key not found: {locale}")]
    KeyNotFound { locale: Locale },
    #[error("Read failed: {0}")]
    ReadFailed(String),
    #[error("Write failed: {0}")]
    WriteFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
