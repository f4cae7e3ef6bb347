//! Changelog entry extraction from commit messages.
//!
//! Only commits whose first line references a tracked issue (`#1234`) are
//! release-note sources. Their entries live in fenced blocks:
//!
//! ````text
//! Merge pull request #5555 from org/branch
//!
//! ```changelog
//! * fix(dns): handle truncated responses
//! ```
//! ````

use crate::config::Patterns;

/// Check whether a commit headline carries the headline marker
pub fn is_qualifying_headline(headline: &str, patterns: &Patterns) -> bool {
    patterns.headline.is_match(headline)
}

/// Raw entry lines of a commit message.
///
/// Returns nothing unless the first line of `message` carries the headline
/// marker; otherwise behaves like [fenced_lines].
pub fn extract_entries(message: &str, patterns: &Patterns) -> Vec<String> {
    let headline = message.lines().next().unwrap_or("");
    if !is_qualifying_headline(headline, patterns) {
        return Vec::new();
    }
    fenced_lines(message, patterns)
}

/// Trimmed, non-blank lines inside every fenced changelog block of `message`.
///
/// A block opens at a line equal to the fence-open marker and closes at the
/// next line equal to the fence-close marker, both compared after trimming.
/// An unclosed block runs to the end of the message.
pub fn fenced_lines(message: &str, patterns: &Patterns) -> Vec<String> {
    let mut entries = Vec::new();
    let mut inside = false;

    for line in message.lines() {
        let line = line.trim();
        if line == patterns.fence_open {
            inside = true;
        } else if line == patterns.fence_close {
            inside = false;
        } else if inside && !line.is_empty() {
            entries.push(line.to_string());
        }
    }

    entries
}
