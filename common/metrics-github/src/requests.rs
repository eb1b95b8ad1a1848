//! Single-page collection requests

use crate::DEFAULT_USER_AGENT;
use crate::client::GitHubClient;
use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

/// Largest page GitHub serves for `per_page`
pub const PAGE_SIZE_CAP: usize = 100;

/// `state` query parameter accepted by the issue and pull request endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Open,
    Closed,
    All,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Open => "open",
            State::Closed => "closed",
            State::All => "all",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(State::Open),
            "closed" => Ok(State::Closed),
            "all" => Ok(State::All),
            other => Err(format!(
                "Invalid state '{}': expected open, closed or all",
                other
            )),
        }
    }
}

/// Whether a page of `len` items may have been cut short by the page-size cap
pub fn reached_page_cap(len: usize) -> bool {
    len >= PAGE_SIZE_CAP
}

impl GitHubClient {
    /// GET `path` once and deserialize the body as a JSON array
    ///
    /// The token, when configured, is attached as the `access_token` query
    /// parameter, so transport errors are stripped of their URL before they
    /// propagate. A `202 Accepted` response means GitHub is still computing
    /// the resource; it is logged and treated as an empty collection, as is
    /// the `204 No Content` served for an empty repository.
    pub(crate) async fn get_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, query = ?query, "GET");

        let mut params = query.to_vec();
        if let Some(token) = &self.token {
            params.push(("access_token", token.clone()));
        }

        let response = self
            .client
            .get(&url)
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json")
            .query(&params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();

        if status == StatusCode::ACCEPTED {
            tracing::warn!(
                url = %url,
                "GitHub is still computing this resource (202 Accepted); treating it as empty"
            );
            return Ok(Vec::new());
        }

        if status == StatusCode::NO_CONTENT {
            tracing::debug!(url = %url, "204 No Content; treating it as empty");
            return Ok(Vec::new());
        }

        if !status.is_success() {
            let rate_limited = status == StatusCode::FORBIDDEN
                && response
                    .headers()
                    .get("x-ratelimit-remaining")
                    .and_then(|value| value.to_str().ok())
                    == Some("0");

            if rate_limited {
                let hint = if self.token.is_none() {
                    "Configure a GitHub token for a higher quota."
                } else {
                    "Wait for the quota to reset."
                };
                return Err(anyhow!(
                    "GitHub API rate limit exceeded for {}. {}",
                    url,
                    hint
                ));
            }

            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!(
                "Request to {} failed ({} {}): {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                error_text
            ));
        }

        let items: Vec<T> = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to parse GitHub API response from {}", url))?;
        Ok(items)
    }

    /// Like [`get_collection`](Self::get_collection) but asks for a full page
    /// and warns when the page came back at the cap
    pub(crate) async fn get_capped_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        what: &str,
    ) -> Result<Vec<T>> {
        let items: Vec<T> = self
            .get_collection(path, &[("per_page", PAGE_SIZE_CAP.to_string())])
            .await?;

        if reached_page_cap(items.len()) {
            tracing::warn!(
                "Received {} {}, the maximum for a single page. Pagination is not supported, so the result may be incomplete.",
                items.len(),
                what
            );
        }

        Ok(items)
    }
}
