//! Aggregate reports: weekly histograms, top-N rankings and unique contributors

use super::fetcher::CollectionFetcher;
use super::types::{IssueDate, PullRequestDate, RankingEntry, WeekStart, WeeklyBucket};
use crate::error::MetricsError;
use crate::utils::dates::week_windows;
use crate::utils::filters::DateFilter;
use anyhow::Result;
use chrono::{DateTime, Utc};
use metrics_github::{Contributor, State, parse_github_url};
use std::collections::HashSet;

impl CollectionFetcher {
    /// Issues per trailing week, most recent week first, followed by a total
    pub async fn weekly_issue_histogram(
        &self,
        repository_urls: &[String],
        weeks: usize,
        by: IssueDate,
    ) -> Result<Vec<WeeklyBucket>> {
        self.weekly_issue_histogram_at(repository_urls, weeks, by, Utc::now())
            .await
    }

    /// [`weekly_issue_histogram`](Self::weekly_issue_histogram) anchored at `now`
    pub async fn weekly_issue_histogram_at(
        &self,
        repository_urls: &[String],
        weeks: usize,
        by: IssueDate,
        now: DateTime<Utc>,
    ) -> Result<Vec<WeeklyBucket>> {
        let mut buckets = Vec::with_capacity(weeks + 1);

        for window in week_windows(now, weeks) {
            let (state, filter) = match by {
                IssueDate::Created => (
                    State::All,
                    DateFilter::created_between(window.start, window.end),
                ),
                IssueDate::Closed => (
                    State::Closed,
                    DateFilter::finished_between(window.start, window.end),
                ),
            };

            let count = self
                .fetch_issues(repository_urls, state, &filter)
                .await?
                .len();
            buckets.push(WeeklyBucket {
                week_start: WeekStart::Date(window.start.date_naive()),
                count,
            });
        }

        Ok(with_total(buckets))
    }

    /// Pull requests per trailing week, most recent week first, followed by a total
    pub async fn weekly_pull_request_histogram(
        &self,
        repository_urls: &[String],
        weeks: usize,
        by: PullRequestDate,
    ) -> Result<Vec<WeeklyBucket>> {
        self.weekly_pull_request_histogram_at(repository_urls, weeks, by, Utc::now())
            .await
    }

    pub async fn weekly_pull_request_histogram_at(
        &self,
        repository_urls: &[String],
        weeks: usize,
        by: PullRequestDate,
        now: DateTime<Utc>,
    ) -> Result<Vec<WeeklyBucket>> {
        let mut buckets = Vec::with_capacity(weeks + 1);

        for window in week_windows(now, weeks) {
            let (state, filter) = match by {
                PullRequestDate::Created => (
                    State::All,
                    DateFilter::created_between(window.start, window.end),
                ),
                PullRequestDate::Merged => (
                    State::Closed,
                    DateFilter::finished_between(window.start, window.end),
                ),
            };

            let count = self
                .fetch_pull_requests(repository_urls, state, &filter)
                .await?
                .len();
            buckets.push(WeeklyBucket {
                week_start: WeekStart::Date(window.start.date_naive()),
                count,
            });
        }

        Ok(with_total(buckets))
    }

    /// Repositories ranked by matching issue count, highest first
    ///
    /// # Errors
    /// Fails with [`MetricsError::InvalidArgument`] when `state` is open and
    /// a closed-date bound is given, before any request is made.
    pub async fn top_issue_repositories(
        &self,
        repository_urls: &[String],
        state: State,
        created_on_or_after: Option<DateTime<Utc>>,
        closed_on_or_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<RankingEntry>> {
        if state == State::Open && closed_on_or_after.is_some() {
            return Err(MetricsError::InvalidArgument(
                "closedOnOrAfter cannot be specified if state is open".to_string(),
            )
            .into());
        }

        let filter = DateFilter {
            created_on_or_after,
            finished_on_or_after: closed_on_or_after,
            ..DateFilter::default()
        };

        let mut entries = Vec::with_capacity(repository_urls.len());
        for url in repository_urls {
            let repo = parse_github_url(url)?;
            let count = self
                .fetch_issues(std::slice::from_ref(url), state, &filter)
                .await?
                .len();
            entries.push(RankingEntry {
                repository_name: repo.name,
                count,
            });
        }

        Ok(rank(entries))
    }

    /// Repositories ranked by matching pull request count, highest first
    ///
    /// # Errors
    /// Fails with [`MetricsError::InvalidArgument`] when `state` is open and
    /// a merged-date bound is given, before any request is made.
    pub async fn top_pull_request_repositories(
        &self,
        repository_urls: &[String],
        state: State,
        created_on_or_after: Option<DateTime<Utc>>,
        merged_on_or_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<RankingEntry>> {
        if state == State::Open && merged_on_or_after.is_some() {
            return Err(MetricsError::InvalidArgument(
                "mergedOnOrAfter cannot be specified if state is open".to_string(),
            )
            .into());
        }

        let filter = DateFilter {
            created_on_or_after,
            finished_on_or_after: merged_on_or_after,
            ..DateFilter::default()
        };

        let mut entries = Vec::with_capacity(repository_urls.len());
        for url in repository_urls {
            let repo = parse_github_url(url)?;
            let count = self
                .fetch_pull_requests(std::slice::from_ref(url), state, &filter)
                .await?
                .len();
            entries.push(RankingEntry {
                repository_name: repo.name,
                count,
            });
        }

        Ok(rank(entries))
    }
}

/// Append the `total` bucket holding the sum of all weekly counts
pub fn with_total(mut buckets: Vec<WeeklyBucket>) -> Vec<WeeklyBucket> {
    let total = buckets.iter().map(|bucket| bucket.count).sum();
    buckets.push(WeeklyBucket {
        week_start: WeekStart::Total,
        count: total,
    });
    buckets
}

/// Sort by count, highest first; equal counts keep their input order
pub fn rank(mut entries: Vec<RankingEntry>) -> Vec<RankingEntry> {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Contributor logins without duplicates, in first-seen order
///
/// Entries GitHub could not attribute to an account are skipped.
pub fn unique_contributors(contributors: &[Contributor]) -> Vec<String> {
    let mut seen = HashSet::new();
    contributors
        .iter()
        .filter_map(Contributor::login)
        .filter(|login| seen.insert(*login))
        .map(str::to_string)
        .collect()
}
