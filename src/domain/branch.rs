use crate::config::Patterns;

/// Check whether a reference name denotes a release branch.
///
/// True for the main branch reference (`refs/heads/master` by default) and
/// for remote release branches such as `refs/remotes/origin/release/1.6.x`.
pub fn is_release_branch(reference: &str, patterns: &Patterns) -> bool {
    reference == patterns.main_branch || patterns.release_branch.is_match(reference)
}
