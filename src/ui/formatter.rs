//! Formatting functions for terminal output.
//!
//! Status and warnings go to stderr so the changelog on stdout can be
//! redirected into a file untouched.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::Commit;

/// Width of the one-line message column in the commit table.
const MESSAGE_WIDTH: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display release branch reference names.
pub fn display_release_branches(branches: &[String]) {
    println!("{}", style("Release branches:").bold());
    for branch in branches {
        println!("  - {}", branch);
    }
}

/// Display the commits of a history as a table, newest first.
///
/// # Arguments
/// * `commits` - Commits to list
/// * `labels` - Release label per commit, same order as `commits`
pub fn display_commit_table(commits: &[Commit], labels: &[String]) {
    println!("{}", style(format!("{} commits:", commits.len())).underlined());
    for line in commit_table(commits, labels) {
        println!("  {}", line);
    }
}

/// Rows of the commit table: short hash, release label, message headline.
pub fn commit_table(commits: &[Commit], labels: &[String]) -> Vec<String> {
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    commits
        .iter()
        .zip(labels)
        .map(|(commit, label)| {
            format!(
                "{}  {:<width$}  {}",
                commit.short_id(7),
                label,
                truncate(commit.headline(), MESSAGE_WIDTH),
                width = label_width
            )
        })
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
