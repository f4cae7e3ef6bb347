use std::fmt;

use crate::domain::commit::abbreviate;

/// Warnings raised at the edges of the commit history and tag snapshot.
/// These are non-fatal: the changelog is still produced and the warnings
/// are reported alongside it.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The starting commit itself carries a release tag, so there is nothing
    /// unreleased to report
    NoNewCommits {
        latest_release: String,
        current_commit_hash: String,
    },
    /// No tag in the repository matches the release tag pattern
    NoReleaseTags,
    /// Several release tags point at the same commit; only one label is kept
    DuplicateTagTarget {
        commit: String,
        kept: String,
        dropped: String,
    },
    /// None of the scanned commits carries the headline marker
    NoQualifyingCommits { scanned: usize },
}

fn short_hash(hash: &str) -> &str {
    abbreviate(hash, 7)
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_release,
                current_commit_hash,
            } => {
                write!(
                    f,
                    "No new commits since release '{}' (current: {})",
                    latest_release,
                    short_hash(current_commit_hash)
                )
            }
            BoundaryWarning::NoReleaseTags => {
                write!(f, "No release tags found; every commit is unreleased")
            }
            BoundaryWarning::DuplicateTagTarget {
                commit,
                kept,
                dropped,
            } => {
                write!(
                    f,
                    "Commit {} is tagged as both '{}' and '{}'; using '{}'",
                    short_hash(commit),
                    dropped,
                    kept,
                    kept
                )
            }
            BoundaryWarning::NoQualifyingCommits { scanned } => {
                write!(
                    f,
                    "None of the {} scanned commits references a tracked issue",
                    scanned
                )
            }
        }
    }
}
