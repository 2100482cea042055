use thiserror::Error;

use polyglot_core::backend::BackendError;

/// Errors that can occur when declaring or accessing translated attributes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("{model} has no translated attribute: {attribute}")]
    UnknownAttribute { model: String, attribute: String },
    #[error("{model} already translates attribute: {attribute}")]
    DuplicateAttribute { model: String, attribute: String },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, RecordError>;
