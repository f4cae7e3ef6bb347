//! User interface module - terminal output for the CLI.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    commit_table, display_boundary_warning, display_commit_table, display_error,
    display_release_branches, display_status,
};
