//! Changelog entry grammar.
//!
//! An entry line has the shape
//!
//! ```text
//! [*][ ]tag(scope)[!]:description[ (#1234)]
//! ```
//!
//! where `tag` is one of `fix`, `feat`, `impr`, `sec` or `note` and `scope` is
//! one or more ASCII word characters. Each piece is consumed in turn so that a
//! rejection names the piece that was wrong.

use std::fmt;

use thiserror::Error;

/// Changelog category, declared in rendering precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Security,
    Feature,
    Improvement,
    Bugfix,
    Note,
}

impl Category {
    /// All categories in rendering precedence order
    pub const ALL: [Category; 5] = [
        Category::Security,
        Category::Feature,
        Category::Improvement,
        Category::Bugfix,
        Category::Note,
    ];

    /// Map an entry tag (`fix`, `feat`, ...) to its category
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "fix" => Some(Category::Bugfix),
            "feat" => Some(Category::Feature),
            "impr" => Some(Category::Improvement),
            "sec" => Some(Category::Security),
            "note" => Some(Category::Note),
            _ => None,
        }
    }

    /// Section heading used in the rendered changelog
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Security => "SECURITY",
            Category::Feature => "FEATURE",
            Category::Improvement => "IMPROVEMENT",
            Category::Bugfix => "BUGFIX",
            Category::Note => "NOTE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// A classified changelog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub category: Category,
    pub scope: String,
    pub description: String,
    /// `tag(scope)!:` marker; parsed but not used for grouping
    pub breaking: bool,
    /// Trailing `(#1234)` back-reference, stripped from the description
    pub pull_request: Option<u64>,
}

impl ChangelogEntry {
    /// Bullet line as it appears in the report: `* {scope}: {description}`
    pub fn bullet(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {}: {}", self.scope, self.description)
    }
}

/// Why an entry line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidEntry {
    #[error("unknown entry tag '{0}'")]
    UnknownTag(String),

    #[error("missing '(scope)' after tag")]
    MissingScope,

    #[error("empty scope")]
    EmptyScope,

    #[error("scope contains non-word characters")]
    MalformedScope,

    #[error("missing ':' after scope")]
    MissingColon,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split a leading run of word characters off `input`
fn take_word(input: &str) -> (&str, &str) {
    let end = input.find(|c: char| !is_word_char(c)).unwrap_or(input.len());
    input.split_at(end)
}

/// Classify one raw entry line.
///
/// Never panics; malformed input yields an [InvalidEntry] describing the
/// first piece of the grammar that did not match.
pub fn classify(raw: &str) -> Result<ChangelogEntry, InvalidEntry> {
    let rest = raw.strip_prefix('*').unwrap_or(raw);
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    let (tag, rest) = take_word(rest);
    let category =
        Category::from_tag(tag).ok_or_else(|| InvalidEntry::UnknownTag(tag.to_string()))?;

    let rest = rest.strip_prefix('(').ok_or(InvalidEntry::MissingScope)?;
    let (scope, rest) = take_word(rest);
    let rest = match rest.strip_prefix(')') {
        Some(rest) if !scope.is_empty() => rest,
        Some(_) => return Err(InvalidEntry::EmptyScope),
        None if scope.is_empty() && rest.is_empty() => return Err(InvalidEntry::EmptyScope),
        None => return Err(InvalidEntry::MalformedScope),
    };

    let (breaking, rest) = match rest.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let description = rest.strip_prefix(':').ok_or(InvalidEntry::MissingColon)?;

    let (description, pull_request) = split_back_reference(description.trim());

    Ok(ChangelogEntry {
        category,
        scope: scope.to_string(),
        description: description.to_string(),
        breaking,
        pull_request,
    })
}

/// Split a trailing `(#1234)` off a trimmed description
fn split_back_reference(description: &str) -> (&str, Option<u64>) {
    let Some(body) = description.strip_suffix(')') else {
        return (description, None);
    };
    let Some(open) = body.rfind("(#") else {
        return (description, None);
    };
    let digits = &body[open + 2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return (description, None);
    }
    (description[..open].trim_end(), digits.parse().ok())
}
