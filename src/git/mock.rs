use crate::domain::Commit;
use crate::error::{ChangelogError, Result};
use crate::git::Repository;

/// In-memory repository snapshot for tests and the demo mode.
///
/// Commits are kept in insertion order, oldest first, mirroring how history
/// is built; [Repository::list_commits] returns them newest first.
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    commits: Vec<Commit>,
    tags: Vec<(String, String)>,
    branches: Vec<String>,
    fail_history: bool,
    fail_tags: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit on top of the current history
    pub fn add_commit(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.commits.push(Commit::new(id, message));
    }

    /// Append a pull-request merge commit carrying one fenced changelog block
    pub fn add_pull_request(&mut self, id: impl Into<String>, pr: u32, entries: &[&str]) {
        self.add_commit(id, pull_request_message(pr, entries));
    }

    /// Add a tag pointing at a commit id
    pub fn add_tag(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.tags.push((name.into(), target.into()));
    }

    /// Add a branch reference name
    pub fn add_branch(&mut self, reference: impl Into<String>) {
        self.branches.push(reference.into());
    }

    /// Make [Repository::list_commits] fail
    pub fn fail_history(mut self) -> Self {
        self.fail_history = true;
        self
    }

    /// Make [Repository::list_release_tags] fail
    pub fn fail_tags(mut self) -> Self {
        self.fail_tags = true;
        self
    }

    /// The four-commit sample history used by the demo mode.
    ///
    /// Oldest to newest: #5555 `fix(dns)` tagged `v1.7.3`, #6666 `fix(dns)`,
    /// #7777 `feat(agent)`, #8888 `feat(agent)`.
    pub fn sample() -> Self {
        let mut repo = MockRepository::new();
        repo.add_pull_request(sample_hash(5), 5555, &["fix(dns): five five five"]);
        repo.add_tag("v1.7.3", sample_hash(5));
        repo.add_pull_request(sample_hash(6), 6666, &["fix(dns): six six six"]);
        repo.add_pull_request(sample_hash(7), 7777, &["feat(agent): seven seven seven"]);
        repo.add_pull_request(sample_hash(8), 8888, &["feat(agent): eight eight eight"]);
        repo.add_branch("refs/heads/master");
        repo.add_branch("refs/remotes/origin/release/1.7.x");
        repo.add_branch("refs/remotes/origin/feature-something");
        repo
    }
}

fn sample_hash(digit: u32) -> String {
    std::iter::repeat(char::from_digit(digit, 10).unwrap_or('0'))
        .take(40)
        .collect()
}

/// Message of a merged pull request with a fenced changelog block
pub fn pull_request_message(pr: u32, entries: &[&str]) -> String {
    format!(
        "Merge pull request #{} from hashicorp/something\nother notes\n```changelog\n{}\n```\n",
        pr,
        entries.join("\n")
    )
}

impl Repository for MockRepository {
    fn list_commits(&self, start_ref: &str) -> Result<Vec<Commit>> {
        if self.fail_history {
            return Err(ChangelogError::history(format!(
                "cannot walk history from '{}'",
                start_ref
            )));
        }
        Ok(self.commits.iter().rev().cloned().collect())
    }

    fn list_release_tags(&self) -> Result<Vec<(String, String)>> {
        if self.fail_tags {
            return Err(ChangelogError::tags("tag references unreadable"));
        }
        Ok(self.tags.clone())
    }

    fn list_branches(&self) -> Result<Vec<String>> {
        Ok(self.branches.clone())
    }
}
