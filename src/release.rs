//! Release assignment: partition a newest-first commit walk into release buckets.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Commit, ReleaseLabel, TagMap};

/// Which part of the history becomes part of the changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssignMode {
    /// Full history, one bucket per release plus the unreleased bucket
    #[default]
    #[serde(rename = "all")]
    AllReleases,
    /// Only the commits newer than the most recent release tag
    #[serde(rename = "current")]
    CurrentRelease,
}

/// Ordering of release buckets after the unreleased bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseOrder {
    /// Reverse string comparison of labels. Only correct while every version
    /// component is a single digit: `"1.9.0"` sorts before `"1.10.0"`.
    #[default]
    Lexicographic,
    /// Reverse semantic-version comparison; labels that do not parse as
    /// semver (e.g. `1.2.00`) follow every parsed one, in reverse string order
    Semantic,
}

impl ReleaseOrder {
    /// Compare two bucket labels; `Less` means `a` is listed first.
    ///
    /// The unreleased label always comes first.
    pub fn compare(&self, a: &ReleaseLabel, b: &ReleaseLabel) -> Ordering {
        match (a, b) {
            (ReleaseLabel::Unreleased, ReleaseLabel::Unreleased) => Ordering::Equal,
            (ReleaseLabel::Unreleased, _) => Ordering::Less,
            (_, ReleaseLabel::Unreleased) => Ordering::Greater,
            (ReleaseLabel::Release(a), ReleaseLabel::Release(b)) => match self {
                ReleaseOrder::Lexicographic => b.cmp(a),
                ReleaseOrder::Semantic => semantic_key(b).cmp(&semantic_key(a)),
            },
        }
    }
}

/// Sort key for semantic order: parsed versions rank above unparsed labels
fn semantic_key(label: &str) -> (Option<semver::Version>, &str) {
    (semver::Version::parse(label).ok(), label)
}

/// Commits attributed to one release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseBucket<'a> {
    pub label: ReleaseLabel,
    /// Commits in walk order (newest first)
    pub commits: Vec<&'a Commit>,
}

/// Assigns commits to release buckets
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseAssigner {
    mode: AssignMode,
    order: ReleaseOrder,
}

impl ReleaseAssigner {
    pub fn new(mode: AssignMode, order: ReleaseOrder) -> Self {
        ReleaseAssigner { mode, order }
    }

    pub fn mode(&self) -> AssignMode {
        self.mode
    }

    /// Partition `commits` (newest first) into release buckets.
    ///
    /// In [AssignMode::AllReleases] a tagged commit opens the bucket of its
    /// release and belongs to it, together with every older commit down to
    /// the next tagged one. Buckets are returned unreleased first, then in
    /// [ReleaseOrder]; empty buckets are never returned.
    ///
    /// In [AssignMode::CurrentRelease] the walk stops at the first tagged
    /// commit and the untagged prefix is returned as the unreleased bucket.
    pub fn assign<'a>(&self, commits: &'a [Commit], tags: &TagMap) -> Vec<ReleaseBucket<'a>> {
        match self.mode {
            AssignMode::AllReleases => self.assign_all(commits, tags),
            AssignMode::CurrentRelease => assign_current(commits, tags),
        }
    }

    fn assign_all<'a>(&self, commits: &'a [Commit], tags: &TagMap) -> Vec<ReleaseBucket<'a>> {
        let mut buckets: Vec<ReleaseBucket<'a>> = Vec::new();
        let mut index: HashMap<ReleaseLabel, usize> = HashMap::new();
        let mut current = ReleaseLabel::Unreleased;

        for commit in commits {
            if let Some(version) = tags.label_for(&commit.id) {
                tracing::debug!(
                    commit = %commit.short_id(7),
                    release = %version,
                    "release boundary"
                );
                current = ReleaseLabel::release(version);
            }

            let slot = *index.entry(current.clone()).or_insert_with(|| {
                buckets.push(ReleaseBucket {
                    label: current.clone(),
                    commits: Vec::new(),
                });
                buckets.len() - 1
            });
            buckets[slot].commits.push(commit);
        }

        buckets.sort_by(|a, b| self.order.compare(&a.label, &b.label));
        buckets
    }
}

fn assign_current<'a>(commits: &'a [Commit], tags: &TagMap) -> Vec<ReleaseBucket<'a>> {
    let unreleased: Vec<&'a Commit> = commits
        .iter()
        .take_while(|commit| !tags.contains(&commit.id))
        .collect();

    if unreleased.is_empty() {
        return Vec::new();
    }

    vec![ReleaseBucket {
        label: ReleaseLabel::Unreleased,
        commits: unreleased,
    }]
}
