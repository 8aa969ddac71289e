use thiserror::Error;

/// Unified error type for issue-branch operations
#[derive(Error, Debug)]
pub enum IssueBranchError {
    #[error("Malformed title: {0}")]
    MalformedTitle(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in issue-branch
pub type Result<T> = std::result::Result<T, IssueBranchError>;

impl IssueBranchError {
    /// Create a malformed-title error with context
    pub fn malformed_title(msg: impl Into<String>) -> Self {
        IssueBranchError::MalformedTitle(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        IssueBranchError::Branch(msg.into())
    }

    /// Create a clipboard error with context
    pub fn clipboard(msg: impl Into<String>) -> Self {
        IssueBranchError::Clipboard(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        IssueBranchError::Config(msg.into())
    }
}
