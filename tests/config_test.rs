// tests/config_test.rs
use git_changelog::config::{load_config, Config, LOCAL_CONFIG_FILE};
use git_changelog::error::ChangelogError;
use git_changelog::release::{AssignMode, ReleaseOrder};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.patterns.headline, r"#[0-9]{4,5}");
    assert_eq!(config.patterns.release_tag, r"^v([0-9]+\.[0-9]+\.[0-9]+)$");
    assert_eq!(config.patterns.main_branch, "refs/heads/master");
    assert_eq!(config.output.mode, AssignMode::AllReleases);
    assert_eq!(config.output.release_order, ReleaseOrder::Lexicographic);
    assert_eq!(config.output.start_ref, "HEAD");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[patterns]
headline = "JIRA-\\d+"
release_tag = "^release-(\\d+\\.\\d+)$"

[output]
mode = "current"
release_order = "semantic"
start_ref = "refs/heads/main"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.patterns.headline, r"JIRA-\d+");
    assert_eq!(config.patterns.release_tag, r"^release-(\d+\.\d+)$");
    // Unset keys keep their defaults
    assert_eq!(config.patterns.fence, "changelog");
    assert_eq!(config.output.mode, AssignMode::CurrentRelease);
    assert_eq!(config.output.release_order, ReleaseOrder::Semantic);
    assert_eq!(config.output.start_ref, "refs/heads/main");

    let patterns = config.patterns.compile().unwrap();
    assert!(patterns.headline.is_match("Merge JIRA-42"));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let result = load_config(Some("/nonexistent/changelog.toml"));
    assert!(matches!(result, Err(ChangelogError::Config(_))));
}

#[test]
fn test_malformed_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[output]\nmode = \"sometimes\"\n").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(matches!(result, Err(ChangelogError::Config(_))));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(LOCAL_CONFIG_FILE),
        "[output]\nmode = \"current\"\n",
    )
    .unwrap();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original_dir).unwrap();

    assert_eq!(result.unwrap().output.mode, AssignMode::CurrentRelease);
}
