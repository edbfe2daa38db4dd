use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn git(repo: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn commit_file(repo: &Path, name: &str) {
    std::fs::write(repo.join(name), name).unwrap();
    git(repo, &["add", name]);
    git(repo, &["commit", "-m", name]);
}

/// A repository on `master` with one merged and one unmerged topic branch.
fn test_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = dir.path();

    git(repo, &["init"]);
    git(repo, &["config", "user.email", "test@test.com"]);
    git(repo, &["config", "user.name", "Test"]);
    git(repo, &["checkout", "-B", "master"]);
    commit_file(repo, "base.txt");

    git(repo, &["checkout", "-b", "merged-topic"]);
    commit_file(repo, "merged.txt");
    git(repo, &["checkout", "master"]);
    git(repo, &["merge", "merged-topic"]);

    git(repo, &["checkout", "-b", "unmerged-topic"]);
    commit_file(repo, "unmerged.txt");
    git(repo, &["checkout", "master"]);

    dir
}

fn cmd(repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-merged").unwrap();
    cmd.current_dir(repo);
    cmd
}

#[test]
fn explicit_branches_render_plain_table() {
    let dir = test_repo();

    let expected = "\
Branch         Status (against master)

merged-topic   merged
unmerged-topic NOT merged
";

    cmd(dir.path())
        .args(["merged-topic", "unmerged-topic", "--branch=master"])
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::is_empty());
}

#[test]
fn default_selection_lists_local_branches() {
    let dir = test_repo();

    cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("merged-topic"))
        .stdout(predicate::str::contains("unmerged-topic"))
        .stdout(predicate::str::contains("Status (against master)"));
}

#[test]
fn integration_branch_defaults_to_current() {
    let dir = test_repo();
    git(dir.path(), &["checkout", "unmerged-topic"]);

    cmd(dir.path())
        .args(["master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status (against unmerged-topic)"))
        .stdout(predicate::str::contains("master"));
}

#[test]
fn duplicate_branch_option_exits_one_without_table() {
    let dir = test_repo();

    cmd(dir.path())
        .args(["--branch=a", "--branch=b"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--branch"));
}

#[test]
fn unknown_option_exits_one_with_usage() {
    let dir = test_repo();

    cmd(dir.path())
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_zero() {
    let dir = test_repo();

    cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_and_continues() {
    let dir = test_repo();

    cmd(dir.path())
        .args(["-v", "merged-topic", "--branch=master"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("merged-topic merged"));
}

#[test]
fn missing_branch_is_fatal() {
    let dir = test_repo();

    cmd(dir.path())
        .args(["no-such-branch", "--branch=master"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn outside_a_repository_is_fatal() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn forced_color_on_pipe_warns_and_falls_back() {
    let dir = test_repo();

    cmd(dir.path())
        .args(["merged-topic", "--branch=master", "-c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merged-topic merged"))
        .stderr(predicate::str::contains("Warning"))
        .stderr(predicate::str::contains("stdout is not a terminal"));
}
