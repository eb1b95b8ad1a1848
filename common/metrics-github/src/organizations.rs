//! Organization operations: members, teams and team members

use crate::client::GitHubClient;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An account as listed by the collaborator and membership endpoints
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct User {
    pub login: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Team {
    /// Teams are matched by display name or by slug
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.slug == name
    }
}

impl GitHubClient {
    pub async fn list_org_members(&self, organization: &str) -> Result<Vec<User>> {
        let path = format!("orgs/{}/members", organization);
        self.get_capped_collection(&path, "organization members")
            .await
    }

    pub async fn list_teams(&self, organization: &str) -> Result<Vec<Team>> {
        let path = format!("orgs/{}/teams", organization);
        self.get_capped_collection(&path, "teams").await
    }

    pub async fn list_team_members(&self, team_id: u64) -> Result<Vec<User>> {
        let path = format!("teams/{}/members", team_id);
        self.get_capped_collection(&path, "team members").await
    }
}
