//! Domain logic - pure changelog rules independent of git operations

pub mod branch;
pub mod commit;
pub mod entry;
pub mod tag;

pub use branch::is_release_branch;
pub use commit::Commit;
pub use entry::{classify, Category, ChangelogEntry, InvalidEntry};
pub use tag::{release_label, release_tag_map, ReleaseLabel, TagMap, UNRELEASED};
