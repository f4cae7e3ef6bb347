use crate::domain::Commit;
use crate::error::{ChangelogError, Result};
use git2::{Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository at exactly `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open(path).map_err(|e| {
            ChangelogError::repository_open(format!("{}: {}", path.display(), e.message()))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Discover the repository containing `path`, searching parent directories
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            ChangelogError::repository_open(format!("{}: {}", path.display(), e.message()))
        })?;

        Ok(Git2Repository { repo })
    }
}

impl super::Repository for Git2Repository {
    fn list_commits(&self, start_ref: &str) -> Result<Vec<Commit>> {
        let walk_error = |e: git2::Error| {
            ChangelogError::history(format!("walking from '{}': {}", start_ref, e.message()))
        };

        let start = self
            .repo
            .revparse_single(start_ref)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| {
                ChangelogError::history(format!("cannot resolve '{}': {}", start_ref, e.message()))
            })?;

        let mut revwalk = self.repo.revwalk().map_err(walk_error)?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(walk_error)?;
        revwalk.push(start.id()).map_err(walk_error)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result.map_err(walk_error)?;
            let commit = self.repo.find_commit(oid).map_err(walk_error)?;
            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

            commits.push(Commit::new(oid.to_string(), message));
        }

        tracing::debug!(start_ref, count = commits.len(), "walked commit history");
        Ok(commits)
    }

    fn list_release_tags(&self) -> Result<Vec<(String, String)>> {
        let tag_error = |e: git2::Error| ChangelogError::tags(e.message().to_string());

        let names = self.repo.tag_names(None).map_err(tag_error)?;
        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference = self
                .repo
                .find_reference(&format!("refs/tags/{}", name))
                .map_err(tag_error)?;

            // Lightweight and annotated tags both peel to the tagged commit
            match reference.peel_to_commit() {
                Ok(commit) => tags.push((name.to_string(), commit.id().to_string())),
                Err(e) => {
                    tracing::debug!(tag = name, error = %e, "tag does not point at a commit");
                }
            }
        }

        Ok(tags)
    }

    fn list_branches(&self) -> Result<Vec<String>> {
        let branch_error = |e: git2::Error| ChangelogError::branches(e.message().to_string());

        let mut names = Vec::new();
        for branch in self.repo.branches(None).map_err(branch_error)? {
            let (branch, _) = branch.map_err(branch_error)?;
            if let Some(name) = branch.get().name() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }
}
