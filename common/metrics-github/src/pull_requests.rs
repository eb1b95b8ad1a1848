//! Pull request operations

use crate::client::GitHubClient;
use crate::requests::State;
use crate::util::RepositoryRef;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A pull request as returned by `GET /repos/{owner}/{repo}/pulls`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PullRequest {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PullRequest {
    pub fn number(&self) -> Option<u64> {
        self.fields.get("number").and_then(Value::as_u64)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    pub fn html_url(&self) -> Option<&str> {
        self.fields.get("html_url").and_then(Value::as_str)
    }
}

impl GitHubClient {
    /// List the first page of pull requests in a repository
    pub async fn list_pull_requests(
        &self,
        repo: &RepositoryRef,
        state: State,
    ) -> Result<Vec<PullRequest>> {
        let path = format!("repos/{}/{}/pulls", repo.owner, repo.name);
        self.get_collection(&path, &[("state", state.to_string())])
            .await
    }
}
