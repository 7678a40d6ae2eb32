//! CLI integration tests using the REAL devstack binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn devstack_cmd() -> Command {
    Command::cargo_bin("devstack").expect("Failed to find devstack binary")
}

#[test]
fn test_help_output() {
    devstack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("two-tier npm web application"))
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    devstack_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("devstack"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    devstack_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devstack"));
}

#[test]
fn test_completions_unknown_shell() {
    devstack_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_setup_outside_project() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp directory");
    devstack_cmd()
        .current_dir(temp.path())
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("backend"));
}

#[test]
fn test_run_outside_project() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp directory");
    devstack_cmd()
        .current_dir(temp.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_project_dir_flag_missing_dir() {
    devstack_cmd()
        .args(["-C", "/no/such/devstack/project", "setup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project directory not found"));
}

#[test]
fn test_project_dir_env_var() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp directory");
    devstack_cmd()
        .env("DEVSTACK_PROJECT_DIR", temp.path())
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("backend"));
}

#[test]
fn test_setup_missing_manifest() {
    let project = common::TestProject::new();
    std::fs::remove_file(project.path.join("frontend/package.json"))
        .expect("Failed to remove manifest");

    devstack_cmd()
        .current_dir(&project.path)
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn test_setup_unknown_package_manager() {
    let project = common::TestProject::new();

    devstack_cmd()
        .current_dir(&project.path)
        .args(["setup", "--package-manager", "cargo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown package manager"));
}

#[test]
fn test_version_works_outside_project() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp directory");
    devstack_cmd()
        .current_dir(temp.path())
        .arg("version")
        .assert()
        .success();
}
