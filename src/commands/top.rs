//! Top-N repository ranking commands

use super::{Command, CommandContext, validators};
use crate::github::RankingEntry;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use colored::*;
use metrics_github::State;

/// Which collection the ranking counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingKind {
    Issues,
    PullRequests,
}

/// Rank repositories by how many issues or pull requests match
pub struct TopCommand {
    pub urls: Vec<String>,
    pub kind: RankingKind,
    pub state: State,
    pub created_on_or_after: Option<DateTime<Utc>>,
    /// Closed-date bound for issues, merged-date bound for pull requests
    pub finished_on_or_after: Option<DateTime<Utc>>,
    /// Only print the first `limit` entries
    pub limit: Option<usize>,
}

#[async_trait]
impl Command for TopCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let urls = context.repositories(&self.urls);
        validators::validate_repository_urls(&urls)?;

        let fetcher = context.fetcher();
        let mut entries = match self.kind {
            RankingKind::Issues => {
                fetcher
                    .top_issue_repositories(
                        &urls,
                        self.state,
                        self.created_on_or_after,
                        self.finished_on_or_after,
                    )
                    .await?
            }
            RankingKind::PullRequests => {
                fetcher
                    .top_pull_request_repositories(
                        &urls,
                        self.state,
                        self.created_on_or_after,
                        self.finished_on_or_after,
                    )
                    .await?
            }
        };

        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }

        if context.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        print_ranking(self.kind, &entries);
        Ok(())
    }
}

fn print_ranking(kind: RankingKind, entries: &[RankingEntry]) {
    let noun = match kind {
        RankingKind::Issues => "issues",
        RankingKind::PullRequests => "pull requests",
    };

    println!(
        "{}",
        format!("Repositories ranked by {} ({})", noun, entries.len()).green()
    );
    println!();

    for (position, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            position + 1,
            entry.repository_name.bold(),
            entry.count.to_string().cyan()
        );
    }
}
