//! Integration tests for `reactor make-scm-changes`
//!
//! - changed files select their owning projects plus dependents
//! - untracked files only count with --include-unknown
//! - a clean working copy builds nothing
//! - connections other than scm:git: are rejected
//!
//! Tests needing git are skipped when it is not installed.

mod common;

use std::path::Path;
use std::process::Command;

use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use common::{plan_labels, stderr, stdout, TestWorkspace};
use predicates::prelude::*;

fn git_available() -> bool {
    which::which("git").is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args([
            "-c",
            "user.name=Reactor Test",
            "-c",
            "user.email=reactor@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {args:?} failed");
}

/// Sample workspace committed to a fresh repository
fn committed_workspace() -> TestWorkspace {
    let ws = TestWorkspace::sample();
    git(&ws.path(), &["init", "-q"]);
    git(&ws.path(), &["add", "-A"]);
    git(&ws.path(), &["commit", "-q", "-m", "initial"]);
    ws
}

fn child(ws: &TestWorkspace, name: &str) -> ChildPath {
    ChildPath::new(ws.path().join(name))
}

#[test]
fn test_modified_file_builds_project_and_dependents() {
    if !git_available() {
        eprintln!("git not installed, skipping");
        return;
    }
    let ws = committed_workspace();
    child(&ws, "core/pom.xml").write_str("<project><!-- changed --></project>\n").unwrap();

    let output = ws.run(&["make-scm-changes", "-n"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        plan_labels(&output),
        vec!["org.acme:core", "org.acme:app", "org.acme:web"]
    );
}

#[test]
fn test_move_across_projects_builds_both() {
    if !git_available() {
        eprintln!("git not installed, skipping");
        return;
    }
    let ws = TestWorkspace::sample();
    ws.create_file("core/data.txt", "shared data\n");
    git(&ws.path(), &["init", "-q"]);
    git(&ws.path(), &["add", "-A"]);
    git(&ws.path(), &["commit", "-q", "-m", "initial"]);
    git(&ws.path(), &["mv", "core/data.txt", "tools/data.txt"]);

    let output = ws.run(&["make-scm-changes", "-n"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        plan_labels(&output),
        vec!["org.acme:core", "org.acme:app", "org.acme:web", "org.acme:tools"]
    );
}

#[test]
fn test_untracked_files_need_include_unknown() {
    if !git_available() {
        eprintln!("git not installed, skipping");
        return;
    }
    let ws = committed_workspace();
    child(&ws, "tools/src/new.txt").write_str("new\n").unwrap();

    let output = ws.run(&["make-scm-changes", "-n"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let output = ws.run(&["make-scm-changes", "--include-unknown", "-n"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(plan_labels(&output), vec!["org.acme:tools"]);
}

#[test]
fn test_global_config_can_include_unknown() {
    if !git_available() {
        eprintln!("git not installed, skipping");
        return;
    }
    let ws = committed_workspace();
    ws.write_global_config("[scm]\ninclude_unknown = true\n");
    child(&ws, "tools/new.txt").touch().unwrap();

    let output = ws.run(&["make-scm-changes", "-n"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(plan_labels(&output), vec!["org.acme:tools"]);
}

#[test]
fn test_clean_working_copy_builds_nothing() {
    if !git_available() {
        eprintln!("git not installed, skipping");
        return;
    }
    let ws = committed_workspace();

    let output = ws.run(&["--json", "make-scm-changes", "-n"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let plan: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(plan["projects"], serde_json::json!([]));
}

#[test]
fn test_changes_outside_projects_are_ignored() {
    if !git_available() {
        eprintln!("git not installed, skipping");
        return;
    }
    let ws = committed_workspace();
    child(&ws, "reactor.toml").write_str(&format!("{}\n# note\n", common::SAMPLE_LISTING)).unwrap();

    let output = ws.run(&["-v", "make-scm-changes", "-n"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(predicate::str::contains("No changed projects").eval(&stderr(&output)));
}

#[test]
fn test_unsupported_connection_is_rejected() {
    let ws = TestWorkspace::sample();
    let output = ws.run(&["make-scm-changes", "--scm-connection", "scm:svn:https://example.com/repo", "-n"]);

    assert!(!output.status.success());
    assert!(predicate::str::contains("Unsupported SCM connection").eval(&stderr(&output)));
}

#[test]
fn test_missing_connection_is_rejected() {
    let ws = TestWorkspace::new();
    ws.create_file(
        "reactor.toml",
        "[[project]]\ngroup = \"g\"\nartifact = \"a\"\npath = \".\"\n",
    );

    let output = ws.run(&["make-scm-changes", "-n"]);
    assert!(!output.status.success());
    assert!(predicate::str::contains("No SCM connection configured").eval(&stderr(&output)));
}
