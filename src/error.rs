use thiserror::Error;

/// Unified error type for git-changelog operations.
///
/// Only the version-control collaborator and configuration loading can fail;
/// extraction, classification, assignment and rendering degrade by omission.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Cannot open repository: {0}")]
    RepositoryOpen(String),

    #[error("Commit history unavailable: {0}")]
    HistoryUnavailable(String),

    #[error("Tag enumeration failed: {0}")]
    TagEnumerationFailed(String),

    #[error("Branch enumeration failed: {0}")]
    BranchEnumerationFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a repository-open error with context
    pub fn repository_open(msg: impl Into<String>) -> Self {
        ChangelogError::RepositoryOpen(msg.into())
    }

    /// Create a commit-history error with context
    pub fn history(msg: impl Into<String>) -> Self {
        ChangelogError::HistoryUnavailable(msg.into())
    }

    /// Create a tag enumeration error with context
    pub fn tags(msg: impl Into<String>) -> Self {
        ChangelogError::TagEnumerationFailed(msg.into())
    }

    /// Create a branch enumeration error with context
    pub fn branches(msg: impl Into<String>) -> Self {
        ChangelogError::BranchEnumerationFailed(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }
}
