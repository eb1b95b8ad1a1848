//! Weekly histogram commands

use super::{Command, CommandContext, validators};
use crate::github::{IssueDate, PullRequestDate, WeeklyBucket};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// What a weekly histogram counts
#[derive(Debug, Clone, Copy)]
pub enum HistogramKind {
    Issues(IssueDate),
    PullRequests(PullRequestDate),
}

/// Count issues or pull requests per trailing week
pub struct WeeklyCommand {
    pub urls: Vec<String>,
    pub weeks: usize,
    pub kind: HistogramKind,
}

fn print_histogram(title: &str, buckets: &[WeeklyBucket]) {
    println!("{}", title.green());
    println!();

    for bucket in buckets {
        if bucket.is_total() {
            println!();
            println!(
                "{}",
                format!("{:<12} {:>6}", bucket.week_start, bucket.count).green()
            );
        } else {
            let bar = "▇".repeat(bucket.count.min(60));
            println!(
                "{:<12} {:>6} {}",
                bucket.week_start.to_string().bold(),
                bucket.count,
                bar.cyan()
            );
        }
    }
}

#[async_trait]
impl Command for WeeklyCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let urls = context.repositories(&self.urls);
        validators::validate_repository_urls(&urls)?;
        validators::validate_weeks(self.weeks)?;

        let fetcher = context.fetcher();
        let (buckets, title) = match self.kind {
            HistogramKind::Issues(by) => (
                fetcher.weekly_issue_histogram(&urls, self.weeks, by).await?,
                match by {
                    IssueDate::Created => "Issues created per week",
                    IssueDate::Closed => "Issues closed per week",
                },
            ),
            HistogramKind::PullRequests(by) => (
                fetcher
                    .weekly_pull_request_histogram(&urls, self.weeks, by)
                    .await?,
                match by {
                    PullRequestDate::Created => "Pull requests created per week",
                    PullRequestDate::Merged => "Pull requests merged per week",
                },
            ),
        };

        if context.json {
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        } else {
            print_histogram(title, &buckets);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[tokio::test]
    async fn test_weekly_command_rejects_zero_weeks() {
        let command = WeeklyCommand {
            urls: vec!["https://github.com/o/r".to_string()],
            weeks: 0,
            kind: HistogramKind::Issues(IssueDate::Created),
        };
        let context = CommandContext::new(Settings::default(), false);

        let err = command.execute(&context).await.unwrap_err();
        assert!(err.to_string().contains("at least one week"));
    }
}
