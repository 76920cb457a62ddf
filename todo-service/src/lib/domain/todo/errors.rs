use thiserror::Error;

/// Error for TodoId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoIdError {
    #[error("Missing todo id in path")]
    Missing,
}

/// Top-level error for todo operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error("Invalid todo id: {0}")]
    InvalidId(#[from] TodoIdError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
