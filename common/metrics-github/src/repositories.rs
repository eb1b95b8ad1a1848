//! Repository-level people: collaborators and contributor statistics

use crate::client::GitHubClient;
use crate::organizations::User;
use crate::util::RepositoryRef;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login of the account a contributor entry belongs to
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Author {
    pub login: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One entry of `GET /repos/{owner}/{repo}/stats/contributors`
///
/// `author` is null for commits GitHub cannot attribute to an account.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Contributor {
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub total: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Contributor {
    pub fn login(&self) -> Option<&str> {
        self.author.as_ref().map(|author| author.login.as_str())
    }
}

impl GitHubClient {
    pub async fn list_collaborators(&self, repo: &RepositoryRef) -> Result<Vec<User>> {
        let path = format!("repos/{}/{}/collaborators", repo.owner, repo.name);
        self.get_collection(&path, &[]).await
    }

    /// Contributor statistics; empty while GitHub is still computing them
    pub async fn list_contributor_stats(&self, repo: &RepositoryRef) -> Result<Vec<Contributor>> {
        let path = format!("repos/{}/{}/stats/contributors", repo.owner, repo.name);
        self.get_collection(&path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contributor_login() {
        let contributor: Contributor = serde_json::from_value(json!({
            "author": { "login": "octocat", "id": 1 },
            "total": 135,
            "weeks": []
        }))
        .unwrap();

        assert_eq!(contributor.login(), Some("octocat"));
        assert_eq!(contributor.total, 135);
        assert!(contributor.fields.contains_key("weeks"));
    }

    #[test]
    fn test_contributor_without_author() {
        let contributor: Contributor =
            serde_json::from_value(json!({ "author": null, "total": 3 })).unwrap();

        assert_eq!(contributor.login(), None);
    }
}
