use tracing::{debug, info, instrument, trace};

use crate::boundary::BoundaryWarning;
use crate::config::{Config, Patterns};
use crate::domain::{classify, is_release_branch, release_tag_map, Commit, TagMap};
use crate::error::Result;
use crate::extract::{extract_entries, is_qualifying_headline};
use crate::git::Repository;
use crate::release::{AssignMode, ReleaseAssigner, ReleaseBucket, ReleaseOrder};
use crate::render::{render, ReleaseNotes};

/// Outcome of one changelog generation
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogReport {
    /// Rendered changelog text
    pub text: String,
    /// Classified entries per release, in output order
    pub releases: Vec<ReleaseNotes>,
    /// Non-fatal issues found along the way
    pub warnings: Vec<BoundaryWarning>,
    /// Number of commits assigned to a release bucket
    pub scanned_commits: usize,
}

impl ChangelogReport {
    pub fn entry_count(&self) -> usize {
        self.releases.iter().map(ReleaseNotes::entry_count).sum()
    }
}

/// Builds changelogs from commit history and release tags
pub struct ChangelogAnalyzer {
    patterns: Patterns,
    assigner: ReleaseAssigner,
}

impl ChangelogAnalyzer {
    /// Create a new changelog analyzer
    pub fn new(patterns: Patterns, mode: AssignMode, order: ReleaseOrder) -> Self {
        ChangelogAnalyzer {
            patterns,
            assigner: ReleaseAssigner::new(mode, order),
        }
    }

    /// Create an analyzer from configuration, compiling its patterns
    pub fn from_config(config: &Config) -> Result<Self> {
        let patterns = config.patterns.compile()?;
        Ok(Self::new(
            patterns,
            config.output.mode,
            config.output.release_order,
        ))
    }

    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    pub fn mode(&self) -> AssignMode {
        self.assigner.mode()
    }

    /// Render the changelog for the history reachable from `start_ref`
    ///
    /// # Returns
    /// * `Ok(String)` - The changelog text (possibly empty)
    /// * `Err` - If commits or tags cannot be enumerated; no partial output
    pub fn generate<R: Repository>(&self, repo: &R, start_ref: &str) -> Result<String> {
        Ok(self.analyze(repo, start_ref)?.text)
    }

    /// Like [ChangelogAnalyzer::generate], also returning entries and warnings
    #[instrument(skip(self, repo), fields(mode = ?self.mode()))]
    pub fn analyze<R: Repository>(&self, repo: &R, start_ref: &str) -> Result<ChangelogReport> {
        let commits = repo.list_commits(start_ref)?;
        let tags = repo.list_release_tags()?;
        let tag_map = release_tag_map(&tags, &self.patterns);

        debug!(
            commits = commits.len(),
            tags = tags.len(),
            releases = tag_map.len(),
            "loaded repository snapshot"
        );

        Ok(self.build_report(&commits, &tag_map))
    }

    /// Build the report from an already loaded snapshot
    pub fn build_report(&self, commits: &[Commit], tag_map: &TagMap) -> ChangelogReport {
        let mut warnings = tag_map.warnings().to_vec();

        if tag_map.is_empty() && !commits.is_empty() {
            warnings.push(BoundaryWarning::NoReleaseTags);
        }

        if self.mode() == AssignMode::CurrentRelease {
            if let Some(head) = commits.first() {
                if let Some(release) = tag_map.label_for(&head.id) {
                    warnings.push(BoundaryWarning::NoNewCommits {
                        latest_release: release.to_string(),
                        current_commit_hash: head.id.clone(),
                    });
                }
            }
        }

        let buckets = self.assigner.assign(commits, tag_map);
        let scanned_commits: usize = buckets.iter().map(|bucket| bucket.commits.len()).sum();
        let qualifying = buckets
            .iter()
            .flat_map(|bucket| bucket.commits.iter())
            .filter(|commit| is_qualifying_headline(commit.headline(), &self.patterns))
            .count();

        if scanned_commits > 0 && qualifying == 0 {
            warnings.push(BoundaryWarning::NoQualifyingCommits {
                scanned: scanned_commits,
            });
        }

        let releases: Vec<ReleaseNotes> = buckets
            .iter()
            .map(|bucket| self.release_notes(bucket))
            .collect();
        let text = render(&releases, self.mode());

        let report = ChangelogReport {
            text,
            releases,
            warnings,
            scanned_commits,
        };

        info!(
            releases = report.releases.len(),
            commits = scanned_commits,
            qualifying,
            entries = report.entry_count(),
            "changelog generated"
        );

        report
    }

    /// Extract and classify the entries of every commit in a bucket
    pub fn release_notes(&self, bucket: &ReleaseBucket<'_>) -> ReleaseNotes {
        let mut notes = ReleaseNotes::new(bucket.label.clone());

        for commit in &bucket.commits {
            for raw in extract_entries(&commit.message, &self.patterns) {
                match classify(&raw) {
                    Ok(entry) => {
                        trace!(
                            commit = %commit.short_id(7),
                            category = %entry.category,
                            "entry accepted"
                        );
                        notes.add(&entry);
                    }
                    Err(reason) => {
                        debug!(
                            commit = %commit.short_id(7),
                            entry = %raw,
                            %reason,
                            "entry dropped"
                        );
                    }
                }
            }
        }

        notes
    }

    /// Reference names of the release branches in the repository
    pub fn release_branches<R: Repository>(&self, repo: &R) -> Result<Vec<String>> {
        let mut branches: Vec<String> = repo
            .list_branches()?
            .into_iter()
            .filter(|name| is_release_branch(name, &self.patterns))
            .collect();
        branches.sort();
        Ok(branches)
    }
}
