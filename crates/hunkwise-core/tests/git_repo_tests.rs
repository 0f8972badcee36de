// Rust guideline compliant 2026-10-14

//! Integration tests against real git repositories.

use hunkwise_core::{
    with_diff_tag_prefix, with_enable_amend, with_exclude_list, Command, Config, Error,
    SystemGit,
};
use std::path::Path;
use std::process::Command as Process;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = Process::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_COMMITTER_DATE", "2024-01-01T00:00:00")
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

fn git_at(dir: &Path, date: &str, args: &[&str]) {
    let status = Process::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_COMMITTER_DATE", date)
        .env("GIT_AUTHOR_DATE", date)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

/// Initializes a repository with one committed file.
fn init_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    git(dir, &["init", "--quiet"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    git(dir, &["config", "tag.gpgsign", "false"]);
    std::fs::write(dir.join("README.md"), "hello\n").unwrap();
    git(dir, &["add", "README.md"]);
    git(dir, &["commit", "--quiet", "-m", "initial"]);
    temp_dir
}

fn command(dir: &Path, config: Config) -> Command<SystemGit> {
    Command::with_runner(config, SystemGit::new().with_work_dir(dir))
}

#[test]
fn test_nothing_staged() {
    let repo = init_repo();
    let cmd = command(repo.path(), Config::default());
    assert!(matches!(cmd.diff_files(), Err(Error::NothingStaged)));
}

#[test]
fn test_staged_diff_excludes_lock_files() {
    let repo = init_repo();
    let dir = repo.path();
    std::fs::write(dir.join("README.md"), "hello\nworld\n").unwrap();
    std::fs::write(dir.join("Cargo.lock"), "lock\n").unwrap();
    git(dir, &["add", "README.md", "Cargo.lock"]);

    let diff = command(dir, Config::default()).diff_files().unwrap();
    assert!(diff.contains("+world"));
    assert!(!diff.contains("Cargo.lock"));
}

#[test]
fn test_only_excluded_files_staged() {
    let repo = init_repo();
    let dir = repo.path();
    std::fs::write(dir.join("notes.txt"), "draft\n").unwrap();
    git(dir, &["add", "notes.txt"]);

    let config = Config::new([with_exclude_list(vec!["notes.txt".to_string()])]);
    assert!(matches!(
        command(dir, config).diff_files(),
        Err(Error::NothingStaged)
    ));
}

#[test]
fn test_amend_diff_and_commit() {
    let repo = init_repo();
    let dir = repo.path();
    std::fs::write(dir.join("src.txt"), "one\n").unwrap();
    git(dir, &["add", "src.txt"]);
    git(dir, &["commit", "--quiet", "-m", "second"]);

    let cmd = command(dir, Config::new([with_enable_amend(true)]));
    let diff = cmd.diff_files().unwrap();
    assert!(diff.contains("+one"));

    cmd.commit("second, reworded").unwrap();
    let log = Process::new("git")
        .args(["log", "--format=%B", "-n", "1"])
        .current_dir(dir)
        .output()
        .unwrap();
    let message = String::from_utf8_lossy(&log.stdout);
    assert!(message.starts_with("second, reworded"));
    assert!(message.contains("Signed-off-by: Test User <test@example.com>"));

    let count = Process::new("git")
        .args(["rev-list", "--count", "HEAD"])
        .current_dir(dir)
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&count.stdout).trim(), "2");
}

#[test]
fn test_tag_range_diff() {
    let repo = init_repo();
    let dir = repo.path();
    git_at(dir, "2024-02-01T00:00:00", &["tag", "-a", "v1.0.0", "-m", "v1.0.0"]);

    std::fs::write(dir.join("feature.txt"), "feature\n").unwrap();
    git(dir, &["add", "feature.txt"]);
    git(dir, &["commit", "--quiet", "-m", "feature"]);
    git_at(dir, "2024-03-01T00:00:00", &["tag", "-a", "other-1", "-m", "other"]);
    git_at(dir, "2024-04-01T00:00:00", &["tag", "-a", "v1.1.0", "-m", "v1.1.0"]);

    let cmd = command(dir, Config::new([with_diff_tag_prefix("v")]));
    assert_eq!(
        cmd.is_diff_tag(),
        (true, "v1.1.0".to_string(), "v1.0.0".to_string())
    );

    // Newer tag first, so the diff reads as a removal.
    let diff = cmd.diff_files().unwrap();
    assert!(diff.contains("-feature"));
}

#[test]
fn test_single_tag_falls_back_to_staged() {
    let repo = init_repo();
    let dir = repo.path();
    git_at(dir, "2024-02-01T00:00:00", &["tag", "-a", "v1.0.0", "-m", "v1.0.0"]);
    std::fs::write(dir.join("README.md"), "changed\n").unwrap();
    git(dir, &["add", "README.md"]);

    let cmd = command(dir, Config::new([with_diff_tag_prefix("v")]));
    assert_eq!(cmd.is_diff_tag(), (true, String::new(), String::new()));
    assert!(cmd.diff_files().unwrap().contains("+changed"));
}

#[test]
fn test_git_dir() {
    let repo = init_repo();
    let cmd = command(repo.path(), Config::default());
    assert_eq!(cmd.git_dir().unwrap(), ".git\n");
    assert_eq!(cmd.hooks_path().unwrap().trim(), ".git/hooks");
}
