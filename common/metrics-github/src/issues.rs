//! Issue operations

use crate::client::GitHubClient;
use crate::requests::State;
use crate::util::RepositoryRef;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An issue as returned by `GET /repos/{owner}/{repo}/issues`
///
/// GitHub lists pull requests on this endpoint too; those carry a non-null
/// `pull_request` object. Fields the tool does not inspect are kept in
/// `fields` so the issue can be re-emitted unchanged.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

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
    /// List the first page of issues in a repository
    ///
    /// Pull requests are returned as well; filtering them out is up to the caller.
    pub async fn list_issues(&self, repo: &RepositoryRef, state: State) -> Result<Vec<Issue>> {
        let path = format!("repos/{}/{}/issues", repo.owner, repo.name);
        self.get_collection(&path, &[("state", state.to_string())])
            .await
    }
}
