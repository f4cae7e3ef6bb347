/// A commit as observed from the history provider.
///
/// Only the identifier and the message take part in changelog generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash
    pub id: String,
    /// Complete, multi-line commit message
    pub message: String,
}

impl Commit {
    /// Create a new commit
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Commit {
            id: id.into(),
            message: message.into(),
        }
    }

    /// First line of the message
    pub fn headline(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Abbreviated hash, at most `len` characters
    pub fn short_id(&self, len: usize) -> &str {
        abbreviate(&self.id, len)
    }
}

/// First `len` characters of a commit id, cut on a char boundary
pub fn abbreviate(id: &str, len: usize) -> &str {
    match id.char_indices().nth(len) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
