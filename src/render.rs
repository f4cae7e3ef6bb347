//! Plain-text changelog rendering.
//!
//! Layout, lines joined with `\n`:
//!
//! ```text
//!
//! ## UNRELEASED
//!
//! FEATURE
//!
//! * agent: eight eight eight
//! * agent: seven seven seven
//!
//! BUGFIX
//!
//! * dns: six six six
//! ```
//!
//! The `## label` heading is only emitted in [AssignMode::AllReleases].

use std::collections::BTreeMap;

use crate::domain::{Category, ChangelogEntry, ReleaseLabel};
use crate::release::AssignMode;

/// Classified entries of one release, grouped by category
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseNotes {
    pub label: ReleaseLabel,
    /// Rendered bullet lines per category, in insertion order
    pub sections: BTreeMap<Category, Vec<String>>,
}

impl ReleaseNotes {
    pub fn new(label: ReleaseLabel) -> Self {
        ReleaseNotes {
            label,
            sections: BTreeMap::new(),
        }
    }

    /// Add an entry under its category
    pub fn add(&mut self, entry: &ChangelogEntry) {
        self.sections
            .entry(entry.category)
            .or_default()
            .push(entry.bullet());
    }

    pub fn entry_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

/// Render release notes into the changelog text.
///
/// Releases without entries and empty categories are omitted; categories
/// follow the fixed precedence SECURITY, FEATURE, IMPROVEMENT, BUGFIX, NOTE
/// and entries within a category are sorted by their bullet text. The same
/// input always yields the same output.
pub fn render(releases: &[ReleaseNotes], mode: AssignMode) -> String {
    let mut lines: Vec<String> = Vec::new();

    for release in releases.iter().filter(|release| !release.is_empty()) {
        if mode == AssignMode::AllReleases {
            lines.push(String::new());
            lines.push(format!("## {}", release.label));
        }

        for (category, entries) in &release.sections {
            if entries.is_empty() {
                continue;
            }
            let mut sorted = entries.clone();
            sorted.sort();

            lines.push(String::new());
            lines.push(category.heading().to_string());
            lines.push(String::new());
            lines.extend(sorted);
        }
    }

    lines.join("\n")
}
