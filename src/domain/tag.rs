use std::collections::HashMap;
use std::fmt;

use crate::boundary::BoundaryWarning;
use crate::config::Patterns;

/// Heading used for commits newer than any release tag
pub const UNRELEASED: &str = "UNRELEASED";

/// Label of a release bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReleaseLabel {
    /// Commits not yet covered by a release tag
    Unreleased,
    /// Version captured from a release tag, e.g. `"1.7.3"` for `v1.7.3`
    Release(String),
}

impl ReleaseLabel {
    /// Create a release label from a captured version string
    pub fn release(version: impl Into<String>) -> Self {
        ReleaseLabel::Release(version.into())
    }

    pub fn is_unreleased(&self) -> bool {
        matches!(self, ReleaseLabel::Unreleased)
    }
}

impl fmt::Display for ReleaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseLabel::Unreleased => f.write_str(UNRELEASED),
            ReleaseLabel::Release(version) => f.write_str(version),
        }
    }
}

/// Mapping from commit id to the release label tagged on it.
///
/// At most one label per commit; see [release_tag_map] for how duplicates
/// are resolved.
#[derive(Debug, Clone, Default)]
pub struct TagMap {
    labels: HashMap<String, String>,
    warnings: Vec<BoundaryWarning>,
}

impl TagMap {
    /// Release label for a commit, if the commit is tagged as a release
    pub fn label_for(&self, commit_id: &str) -> Option<&str> {
        self.labels.get(commit_id).map(String::as_str)
    }

    pub fn contains(&self, commit_id: &str) -> bool {
        self.labels.contains_key(commit_id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Non-fatal issues found while building the map
    pub fn warnings(&self) -> &[BoundaryWarning] {
        &self.warnings
    }

    /// Insert a label directly, bypassing tag-name filtering
    pub fn insert(&mut self, commit_id: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(commit_id.into(), label.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TagMap::default();
        for (commit_id, label) in iter {
            map.insert(commit_id, label);
        }
        map
    }
}

/// Extract the release label from a tag name.
///
/// Returns the first capture group of the release tag pattern
/// (`^v([0-9]+\.[0-9]+\.[0-9]+)$` by default), or `None` for non-release tags.
pub fn release_label(tag_name: &str, patterns: &Patterns) -> Option<String> {
    patterns
        .release_tag
        .captures(tag_name)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Build the commit -> release label map from `(tag name, target commit)` pairs.
///
/// Tags not matching the release pattern are ignored. When several release
/// tags point at the same commit, the last one enumerated wins and a
/// [BoundaryWarning::DuplicateTagTarget] is recorded.
pub fn release_tag_map(tags: &[(String, String)], patterns: &Patterns) -> TagMap {
    let mut map = TagMap::default();

    for (tag_name, target) in tags {
        let Some(label) = release_label(tag_name, patterns) else {
            tracing::debug!(tag = %tag_name, "ignoring non-release tag");
            continue;
        };

        if let Some(previous) = map.labels.insert(target.clone(), label.clone()) {
            if previous != label {
                map.warnings.push(BoundaryWarning::DuplicateTagTarget {
                    commit: target.clone(),
                    kept: label,
                    dropped: previous,
                });
            }
        }
    }

    map
}
