//! Version-control access layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! operations changelog generation needs, allowing for a real repository
//! implementation and an in-memory implementation for tests and demos.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! Code should depend on the [Repository] trait rather than concrete
//! implementations.
//!
//! ```rust
//! # use git_changelog::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let commits = repo.list_commits("HEAD")?;
//! let tags = repo.list_release_tags()?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::{pull_request_message, MockRepository};
pub use repository::Git2Repository;

use crate::domain::Commit;
use crate::error::Result;

/// Read-only git operations used to build a changelog
///
/// ## Error Handling
///
/// Implementations map their failures to the collaborator error kinds:
/// [crate::error::ChangelogError::HistoryUnavailable] for the commit walk,
/// [crate::error::ChangelogError::TagEnumerationFailed] for tags and
/// [crate::error::ChangelogError::BranchEnumerationFailed] for branches.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): In-memory commit and tag snapshot
pub trait Repository: Send {
    /// List commits reachable from a reference
    ///
    /// # Arguments
    /// * `start_ref` - Any revision the repository understands (e.g. "HEAD",
    ///   "refs/heads/master", a commit hash)
    ///
    /// # Returns
    /// * `Ok(Vec<Commit>)` - Commits newest first
    /// * `Err(HistoryUnavailable)` - If the reference cannot be resolved or
    ///   the walk fails
    fn list_commits(&self, start_ref: &str) -> Result<Vec<Commit>>;

    /// List every tag with the commit it points at
    ///
    /// Annotated tags are peeled to their target commit.
    ///
    /// # Returns
    /// * `Ok(Vec<(String, String)>)` - `(tag name, target commit id)` pairs
    /// * `Err(TagEnumerationFailed)` - If tags cannot be read
    fn list_release_tags(&self) -> Result<Vec<(String, String)>>;

    /// List full reference names of all branches, local and remote
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - e.g. `refs/heads/master`, `refs/remotes/origin/release/1.6.x`
    /// * `Err(BranchEnumerationFailed)` - If references cannot be read
    fn list_branches(&self) -> Result<Vec<String>>;
}
