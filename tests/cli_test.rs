use std::process::Command;

fn git_changelog() -> Command {
    Command::new(env!("CARGO_BIN_EXE_git-changelog"))
}

#[test]
fn test_help() {
    let output = git_changelog().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--current"));
    assert!(stdout.contains("--list-branches"));
}

#[test]
fn test_version() {
    let output = git_changelog().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("git-changelog "));
}

#[test]
fn test_demo_prints_changelog() {
    let output = git_changelog().arg("--demo").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 commits:"));
    assert!(stdout.contains("5555555  1.7.3"));
    assert!(stdout.contains("## UNRELEASED"));
    assert!(stdout.contains("* dns: five five five"));
}

#[test]
fn test_demo_list_branches() {
    let output = git_changelog()
        .args(["--demo", "--list-branches"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("refs/remotes/origin/release/1.7.x"));
    assert!(!stdout.contains("## UNRELEASED"));
}

#[test]
fn test_current_and_all_conflict() {
    let output = git_changelog()
        .args(["--demo", "--current", "--all"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_outside_repository_exits_with_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = git_changelog()
        .arg("--path")
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERROR:"));
}
