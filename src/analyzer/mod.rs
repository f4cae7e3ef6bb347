//! Analysis layer - drives changelog generation over a repository

pub mod changelog_analyzer;

pub use changelog_analyzer::{ChangelogAnalyzer, ChangelogReport};
