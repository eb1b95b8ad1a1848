//! CLI argument parsing and end-to-end tests

mod support;

use serde_json::{Value, json};
use support::*;
use tempfile::TempDir;
use wiremock::MockServer;

#[test]
fn test_cli_help_lists_commands() {
    let output = run_cli(&["--help"], None);

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("Commands:"));
    assert!(output.stdout.contains("weekly-issues"));
    assert!(output.stdout.contains("team-members"));
}

#[test]
fn test_cli_weekly_help_states_minimum_weeks() {
    let output = run_cli(&["weekly-issues", "--help"], None);

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("Number of trailing weeks (at least 1)"));
}

#[test]
fn test_cli_invalid_subcommand() {
    let output = run_cli(&["invalid-command"], None);

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("unrecognized subcommand") || output.stderr.contains("invalid"));
}

#[test]
fn test_cli_invalid_state() {
    let output = run_cli(&["issues", "https://github.com/o/r", "--state", "merged"], None);

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("merged"));
}

#[test]
fn test_cli_invalid_date() {
    let output = run_cli(
        &["issues", "https://github.com/o/r", "--created-after", "yesterday"],
        None,
    );

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("yesterday"));
}

#[test]
fn test_cli_top_issues_open_with_closed_bound() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(
        &[
            "top-issues",
            "https://github.com/o/r",
            "--state",
            "open",
            "--closed-after",
            "2024-01-01",
        ],
        Some(temp.path()),
    );

    assert_ne!(output.status, 0);
    assert!(
        output
            .stderr
            .contains("closedOnOrAfter cannot be specified if state is open")
    );
}

#[test]
fn test_cli_top_pulls_open_with_merged_bound() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(
        &[
            "top-pulls",
            "https://github.com/o/r",
            "--merged-after",
            "2024-01-01",
        ],
        Some(temp.path()),
    );

    assert_ne!(output.status, 0);
    assert!(
        output
            .stderr
            .contains("mergedOnOrAfter cannot be specified if state is open")
    );
}

#[test]
fn test_cli_missing_explicit_config() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(
        &["issues", "--config", "nonexistent.yaml"],
        Some(temp.path()),
    );

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("Failed to read config file"));
}

#[test]
fn test_cli_no_repositories() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(&["collaborators"], Some(temp.path()));

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("repository URL must be provided"));
}

#[test]
fn test_cli_members_without_organization() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(&["members"], Some(temp.path()));

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("organization"));
}

#[tokio::test]
async fn test_cli_issues_json_against_stub() {
    let server = MockServer::start().await;
    mount_repo_resource_with_state(
        &server,
        "org",
        "repo",
        "issues",
        "all",
        json!([
            issue(1, "2020-01-05T10:00:00Z", None),
            issue_pull_request(2, "2020-01-06T10:00:00Z"),
        ]),
    )
    .await;

    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("gh-metrics.yaml"),
        format!(
            "api_base: {}\nrepositories:\n  - https://github.com/org/repo\n",
            server.uri()
        ),
    )
    .unwrap();

    let dir = temp.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        run_cli(&["issues", "--state", "all", "--json"], Some(&dir))
    })
    .await
    .unwrap();

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    let issues: Value = serde_json::from_str(&output.stdout).unwrap();
    let issues = issues.as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["number"], json!(1));
    assert_eq!(issues[0]["title"], json!("Issue 1"));
}

#[tokio::test]
async fn test_cli_weekly_pulls_json_has_total() {
    let server = MockServer::start().await;
    mount_repo_resource_with_state(&server, "org", "repo", "pulls", "all", json!([])).await;

    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("gh-metrics.yaml"),
        format!("api_base: {}\n", server.uri()),
    )
    .unwrap();

    let dir = temp.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        run_cli(
            &[
                "weekly-pulls",
                "https://github.com/org/repo",
                "--weeks",
                "3",
                "--json",
            ],
            Some(&dir),
        )
    })
    .await
    .unwrap();

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    let buckets: Value = serde_json::from_str(&output.stdout).unwrap();
    let buckets = buckets.as_array().unwrap();
    assert_eq!(buckets.len(), 4);
    assert_eq!(buckets[3]["week_start"], json!("total"));
    assert_eq!(buckets[3]["count"], json!(0));
}
