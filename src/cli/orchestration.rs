//! Main workflow orchestration logic
//!
//! Keeps CLI argument parsing in main.rs apart from the changelog workflow,
//! so the workflow can be driven programmatically and tested against
//! [MockRepository].

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::analyzer::{ChangelogAnalyzer, ChangelogReport};
use crate::config::Config;
use crate::domain::{release_tag_map, Commit};
use crate::git::{Git2Repository, MockRepository, Repository};
use crate::release::{AssignMode, ReleaseAssigner, ReleaseOrder};

/// Arguments for the changelog workflow
///
/// Mirrors the CLI Args without depending on clap. `None` and `false`
/// fields fall back to the loaded configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangelogWorkflowArgs {
    /// Directory inside the repository to read
    pub path: Option<String>,

    /// Revision the history walk starts from
    pub start_ref: Option<String>,

    /// Override of the configured assignment mode
    pub mode: Option<AssignMode>,

    /// Order releases by semantic version instead of string comparison
    pub semver_order: bool,

    /// Use the built-in sample history instead of a repository
    pub demo: bool,

    /// List release branches instead of rendering a changelog
    pub list_branches: bool,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// Changelog rendered from a repository
    Changelog(ChangelogReport),

    /// Changelog rendered from the sample history, with the history itself
    Demo {
        /// Commits, newest first
        history: Vec<Commit>,
        /// Release label of each commit in `history`
        labels: Vec<String>,
        report: ChangelogReport,
    },

    /// Release branch reference names
    ReleaseBranches(Vec<String>),
}

/// Main changelog workflow
///
/// 1. Apply argument overrides to the configuration
/// 2. Open the repository (or use the sample one in demo mode)
/// 3. Either list release branches or generate the changelog
///
/// # Returns
///
/// The workflow output, or the first fatal error with context
pub fn run_changelog_workflow(
    args: ChangelogWorkflowArgs,
    config: Config,
) -> Result<WorkflowResult> {
    let config = apply_overrides(&args, config);
    let analyzer =
        ChangelogAnalyzer::from_config(&config).context("Invalid pattern configuration")?;
    let start_ref = config.output.start_ref.as_str();

    if args.demo {
        let repo = MockRepository::sample();
        if args.list_branches {
            return run_with_repository(&repo, &analyzer, start_ref, true);
        }
        return run_demo(&repo, &analyzer, start_ref);
    }

    let path = args.path.as_deref().unwrap_or(".");
    let repo = Git2Repository::discover(Path::new(path))
        .with_context(|| format!("Failed to open git repository at '{}'", path))?;

    run_with_repository(&repo, &analyzer, start_ref, args.list_branches)
}

/// Run the workflow against any repository implementation
pub fn run_with_repository<R: Repository>(
    repo: &R,
    analyzer: &ChangelogAnalyzer,
    start_ref: &str,
    list_branches: bool,
) -> Result<WorkflowResult> {
    if list_branches {
        let branches = analyzer
            .release_branches(repo)
            .context("Failed to list release branches")?;
        return Ok(WorkflowResult::ReleaseBranches(branches));
    }

    let report = analyzer
        .analyze(repo, start_ref)
        .with_context(|| format!("Failed to generate changelog from '{}'", start_ref))?;

    Ok(WorkflowResult::Changelog(report))
}

fn run_demo<R: Repository>(
    repo: &R,
    analyzer: &ChangelogAnalyzer,
    start_ref: &str,
) -> Result<WorkflowResult> {
    let history = repo.list_commits(start_ref)?;
    let tags = repo.list_release_tags()?;
    let tag_map = release_tag_map(&tags, analyzer.patterns());

    let mut commit_labels: HashMap<&str, String> = HashMap::new();
    let assigner = ReleaseAssigner::new(AssignMode::AllReleases, ReleaseOrder::Lexicographic);
    for bucket in assigner.assign(&history, &tag_map) {
        for commit in &bucket.commits {
            commit_labels.insert(commit.id.as_str(), bucket.label.to_string());
        }
    }
    let labels = history
        .iter()
        .map(|commit| {
            commit_labels
                .get(commit.id.as_str())
                .cloned()
                .unwrap_or_default()
        })
        .collect();

    let report = analyzer.build_report(&history, &tag_map);

    Ok(WorkflowResult::Demo {
        history,
        labels,
        report,
    })
}

fn apply_overrides(args: &ChangelogWorkflowArgs, mut config: Config) -> Config {
    if let Some(start_ref) = &args.start_ref {
        config.output.start_ref = start_ref.clone();
    }
    if let Some(mode) = args.mode {
        config.output.mode = mode;
    }
    if args.semver_order {
        config.output.release_order = ReleaseOrder::Semantic;
    }
    config
}
