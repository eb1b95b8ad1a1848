//! Common test support utilities and fixtures
//!
//! Shared helpers for tests that talk to a stubbed GitHub API or run the CLI.

#![allow(dead_code)]

use gh_metrics::CollectionFetcher;
use metrics_github::GitHubClient;
use serde_json::{Value, json};
use std::process::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the gh-metrics binary with given arguments
///
/// `GITHUB_TOKEN` is cleared so runs never pick up a developer's credential.
pub fn run_cli(args: &[&str], cwd: Option<&std::path::Path>) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gh-metrics"));
    cmd.args(args).env_remove("GITHUB_TOKEN").env("NO_COLOR", "1");

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().expect("Failed to execute gh-metrics");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// A fetcher pointed at the mock server
pub fn fetcher_for(server: &MockServer) -> CollectionFetcher {
    CollectionFetcher::new(GitHubClient::with_api_base(None, server.uri()))
}

/// Issue JSON as the issues endpoint returns it
pub fn issue(number: u64, created_at: &str, closed_at: Option<&str>) -> Value {
    json!({
        "number": number,
        "title": format!("Issue {number}"),
        "html_url": format!("https://github.com/org/repo/issues/{number}"),
        "state": if closed_at.is_some() { "closed" } else { "open" },
        "created_at": created_at,
        "closed_at": closed_at,
    })
}

/// A pull request as it appears on the issues endpoint
pub fn issue_pull_request(number: u64, created_at: &str) -> Value {
    let mut value = issue(number, created_at, None);
    value["pull_request"] = json!({
        "url": format!("https://api.github.com/repos/org/repo/pulls/{number}")
    });
    value
}

/// Pull request JSON as the pulls endpoint returns it
pub fn pull_request(number: u64, created_at: &str, merged_at: Option<&str>) -> Value {
    json!({
        "number": number,
        "title": format!("PR {number}"),
        "html_url": format!("https://github.com/org/repo/pull/{number}"),
        "created_at": created_at,
        "closed_at": merged_at,
        "merged_at": merged_at,
    })
}

/// Serve `body` for every GET of `/repos/{owner}/{repo}/{resource}`
pub async fn mount_repo_resource(
    server: &MockServer,
    owner: &str,
    repo: &str,
    resource: &str,
    body: Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}/{resource}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve `body` for GETs of `/repos/{owner}/{repo}/{resource}?state={state}`
pub async fn mount_repo_resource_with_state(
    server: &MockServer,
    owner: &str,
    repo: &str,
    resource: &str,
    state: &str,
    body: Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}/{resource}")))
        .and(query_param("state", state))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
