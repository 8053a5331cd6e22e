use thiserror::Error;

/// Custom error types for clipflip
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Too many files: {requested} requested with {already_accepted} already accepted (limit {limit})")]
    TooManyFiles {
        requested: usize,
        already_accepted: usize,
        limit: usize,
    },

    #[error("No valid manifest files among the candidates")]
    NoValidFiles,

    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for clipflip operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
