//! Collection fetching with client-side filtering
//!
//! `CollectionFetcher` is the entry point for every query this tool runs.
//! Each operation walks its inputs in order, issues one single-page request
//! per repository or organization, and filters the results locally. Requests
//! are awaited one at a time; nothing is fetched concurrently.
//!
//! The aggregate reports built on top of these operations live in
//! [`analytics`](super::analytics).

use crate::config::Settings;
use crate::error::MetricsError;
use crate::utils::filters::DateFilter;
use anyhow::{Context, Result};
use metrics_github::{
    Contributor, GitHubClient, Issue, PullRequest, State, Team, User, parse_github_url,
};

/// Fetches GitHub collections for a list of repositories or an organization
pub struct CollectionFetcher {
    pub(crate) client: GitHubClient,
}

impl CollectionFetcher {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.client())
    }

    /// Issues from every repository, in input order, that pass `filter`
    ///
    /// Pull requests listed on the issues endpoint are dropped. Only the
    /// first page of each repository is read.
    ///
    /// # Example
    /// ```rust,no_run
    /// use gh_metrics::{CollectionFetcher, DateFilter, Settings};
    /// use gh_metrics::utils::parse_date;
    /// use metrics_github::State;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let fetcher = CollectionFetcher::from_settings(&Settings::default());
    /// let filter = DateFilter::created_between(parse_date("2020-01-01")?, parse_date("2020-01-31")?);
    /// let issues = fetcher
    ///     .fetch_issues(&["https://github.com/rust-lang/rust".to_string()], State::All, &filter)
    ///     .await?;
    /// println!("{} issues", issues.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_issues(
        &self,
        repository_urls: &[String],
        state: State,
        filter: &DateFilter,
    ) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();

        for url in repository_urls {
            let repo = parse_github_url(url)?;
            let fetched = self
                .client
                .list_issues(&repo, state)
                .await
                .with_context(|| format!("Failed to fetch issues for {}", repo))?;

            let received = fetched.len();
            let before = issues.len();
            issues.extend(
                fetched
                    .into_iter()
                    .filter(|issue| !issue.is_pull_request())
                    .filter(|issue| filter.matches(issue)),
            );
            tracing::debug!(
                repository = %repo,
                received,
                kept = issues.len() - before,
                "filtered issues"
            );
        }

        Ok(issues)
    }

    /// Pull requests from every repository, in input order, that pass `filter`
    ///
    /// The filter's finished bounds apply to `merged_at`, so closed but
    /// unmerged pull requests never satisfy them.
    pub async fn fetch_pull_requests(
        &self,
        repository_urls: &[String],
        state: State,
        filter: &DateFilter,
    ) -> Result<Vec<PullRequest>> {
        let mut pull_requests = Vec::new();

        for url in repository_urls {
            let repo = parse_github_url(url)?;
            let fetched = self
                .client
                .list_pull_requests(&repo, state)
                .await
                .with_context(|| format!("Failed to fetch pull requests for {}", repo))?;

            let received = fetched.len();
            let before = pull_requests.len();
            pull_requests.extend(fetched.into_iter().filter(|pr| filter.matches(pr)));
            tracing::debug!(
                repository = %repo,
                received,
                kept = pull_requests.len() - before,
                "filtered pull requests"
            );
        }

        Ok(pull_requests)
    }

    pub async fn fetch_collaborators(&self, repository_urls: &[String]) -> Result<Vec<User>> {
        let mut collaborators = Vec::new();

        for url in repository_urls {
            let repo = parse_github_url(url)?;
            collaborators.extend(
                self.client
                    .list_collaborators(&repo)
                    .await
                    .with_context(|| format!("Failed to fetch collaborators for {}", repo))?,
            );
        }

        Ok(collaborators)
    }

    pub async fn fetch_contributors(&self, repository_urls: &[String]) -> Result<Vec<Contributor>> {
        let mut contributors = Vec::new();

        for url in repository_urls {
            let repo = parse_github_url(url)?;
            contributors.extend(
                self.client
                    .list_contributor_stats(&repo)
                    .await
                    .with_context(|| format!("Failed to fetch contributors for {}", repo))?,
            );
        }

        Ok(contributors)
    }

    pub async fn fetch_org_members(&self, organization: &str) -> Result<Vec<User>> {
        self.client
            .list_org_members(organization)
            .await
            .with_context(|| format!("Failed to fetch members of {}", organization))
    }

    pub async fn fetch_teams(&self, organization: &str) -> Result<Vec<Team>> {
        self.client
            .list_teams(organization)
            .await
            .with_context(|| format!("Failed to fetch teams of {}", organization))
    }

    /// Members of the team called `team_name` (display name or slug)
    ///
    /// The team is looked up in the first page of the organization's teams.
    pub async fn fetch_team_members(&self, organization: &str, team_name: &str) -> Result<Vec<User>> {
        let teams = self.fetch_teams(organization).await?;

        let team = teams
            .iter()
            .find(|team| team.is_named(team_name))
            .ok_or_else(|| MetricsError::TeamNotFound {
                organization: organization.to_string(),
                team: team_name.to_string(),
            })?;

        self.client
            .list_team_members(team.id)
            .await
            .with_context(|| format!("Failed to fetch members of team {}", team.name))
    }
}
