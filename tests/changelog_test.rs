use git_changelog::config::{Config, PatternsConfig};
use git_changelog::git::{pull_request_message, MockRepository};
use git_changelog::release::{AssignMode, ReleaseOrder};
use git_changelog::{ChangelogAnalyzer, ChangelogError};

fn analyzer(mode: AssignMode, order: ReleaseOrder) -> ChangelogAnalyzer {
    let patterns = PatternsConfig::default().compile().unwrap();
    ChangelogAnalyzer::new(patterns, mode, order)
}

/// Three releases with fixes, features and notes spread across them
fn release_history() -> MockRepository {
    let mut repo = MockRepository::new();
    repo.add_pull_request("a1", 1001, &["feat(core): initial release"]);
    repo.add_tag("v0.9.0", "a1");
    repo.add_pull_request("b1", 1002, &["fix(core): crash on start"]);
    repo.add_commit("b2", "Bump dependencies");
    repo.add_pull_request("b3", 1003, &["sec(tls): pin ciphers", "impr(cli)!: faster startup"]);
    repo.add_tag("v0.10.0", "b3");
    repo.add_pull_request("c1", 1004, &["note(docs): new guide (#1004)"]);
    repo
}

#[test]
fn test_all_releases_lexicographic() {
    let text = analyzer(AssignMode::AllReleases, ReleaseOrder::Lexicographic)
        .generate(&release_history(), "HEAD")
        .unwrap();

    // "0.9.0" > "0.10.0" as strings
    assert_eq!(
        text,
        [
            "",
            "## UNRELEASED",
            "",
            "NOTE",
            "",
            "* docs: new guide",
            "",
            "## 0.9.0",
            "",
            "FEATURE",
            "",
            "* core: initial release",
            "",
            "## 0.10.0",
            "",
            "SECURITY",
            "",
            "* tls: pin ciphers",
            "",
            "IMPROVEMENT",
            "",
            "* cli: faster startup",
            "",
            "BUGFIX",
            "",
            "* core: crash on start",
        ]
        .join("\n")
    );
}

#[test]
fn test_all_releases_semantic_order() {
    let report = analyzer(AssignMode::AllReleases, ReleaseOrder::Semantic)
        .analyze(&release_history(), "HEAD")
        .unwrap();

    let labels: Vec<String> = report
        .releases
        .iter()
        .map(|release| release.label.to_string())
        .collect();
    assert_eq!(labels, vec!["UNRELEASED", "0.10.0", "0.9.0"]);
    assert_eq!(report.entry_count(), 5);
    assert_eq!(report.scanned_commits, 6);
}

#[test]
fn test_current_release_stops_at_latest_tag() {
    let text = analyzer(AssignMode::CurrentRelease, ReleaseOrder::Lexicographic)
        .generate(&release_history(), "HEAD")
        .unwrap();

    assert_eq!(text, "\nNOTE\n\n* docs: new guide");
}

#[test]
fn test_generation_is_idempotent() {
    let repo = release_history();
    let analyzer = analyzer(AssignMode::AllReleases, ReleaseOrder::Lexicographic);

    let first = analyzer.generate(&repo, "HEAD").unwrap();
    let second = analyzer.generate(&repo, "HEAD").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unterminated_fence_runs_to_end() {
    let mut repo = MockRepository::new();
    repo.add_commit(
        "c1",
        "Merge pull request #4321 from a/b\n```changelog\nfix(io): one\n\nfeat(io): two",
    );

    let text = analyzer(AssignMode::CurrentRelease, ReleaseOrder::Lexicographic)
        .generate(&repo, "HEAD")
        .unwrap();

    assert_eq!(text, "\nFEATURE\n\n* io: two\n\nBUGFIX\n\n* io: one");
}

#[test]
fn test_headline_must_be_first_line() {
    let mut repo = MockRepository::new();
    repo.add_commit(
        "c1",
        format!("Squashed commit\n{}", pull_request_message(5555, &["fix(a): b"])),
    );

    let report = analyzer(AssignMode::AllReleases, ReleaseOrder::Lexicographic)
        .analyze(&repo, "HEAD")
        .unwrap();

    assert_eq!(report.text, "");
    assert_eq!(report.entry_count(), 0);
}

#[test]
fn test_three_digit_reference_not_qualifying() {
    let mut repo = MockRepository::new();
    repo.add_pull_request("c1", 123, &["fix(a): b"]);

    let text = analyzer(AssignMode::AllReleases, ReleaseOrder::Lexicographic)
        .generate(&repo, "HEAD")
        .unwrap();

    assert_eq!(text, "");
}

#[test]
fn test_from_default_config_matches_sample() {
    let analyzer = ChangelogAnalyzer::from_config(&Config::default()).unwrap();
    let text = analyzer.generate(&MockRepository::sample(), "HEAD").unwrap();

    assert!(text.starts_with("\n## UNRELEASED\n"));
    assert!(text.ends_with("\n## 1.7.3\n\nBUGFIX\n\n* dns: five five five"));
}

#[test]
fn test_tag_failure_produces_no_output() {
    let repo = release_history().fail_tags();
    let result = analyzer(AssignMode::AllReleases, ReleaseOrder::Lexicographic)
        .generate(&repo, "HEAD");

    assert!(matches!(result, Err(ChangelogError::TagEnumerationFailed(_))));
}
