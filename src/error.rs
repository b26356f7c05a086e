use thiserror::Error;

/// Unified error type for commitlog operations
#[derive(Error, Debug)]
pub enum CommitlogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Revision not found: {0}")]
    RevisionNotFound(String),

    #[error("No commit history: {0}")]
    NoHistory(String),

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Tag resolution failed: {0}")]
    TagResolution(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in commitlog
pub type Result<T> = std::result::Result<T, CommitlogError>;

impl CommitlogError {
    /// Create a revision-not-found error with context
    pub fn revision_not_found(msg: impl Into<String>) -> Self {
        CommitlogError::RevisionNotFound(msg.into())
    }

    /// Create a no-history error with context
    pub fn no_history(msg: impl Into<String>) -> Self {
        CommitlogError::NoHistory(msg.into())
    }

    /// Create an invalid-version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        CommitlogError::InvalidVersion(msg.into())
    }

    /// Create a tag-resolution error with context
    pub fn tag_resolution(msg: impl Into<String>) -> Self {
        CommitlogError::TagResolution(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CommitlogError::Config(msg.into())
    }
}
