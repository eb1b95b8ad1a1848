//! Issue and pull request listing commands

use super::{Command, CommandContext, validators};
use crate::utils::filters::DateFilter;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use metrics_github::State;

/// List issues across repositories, filtered by date
pub struct IssuesCommand {
    pub urls: Vec<String>,
    pub state: State,
    pub filter: DateFilter,
}

/// List pull requests across repositories, filtered by date
pub struct PullsCommand {
    pub urls: Vec<String>,
    pub state: State,
    pub filter: DateFilter,
}

fn print_item(number: Option<u64>, title: Option<&str>, url: Option<&str>, date_line: String) {
    let number = number.map(|n| format!("#{n}")).unwrap_or_default();
    println!(
        "{} {} {}",
        "•".blue(),
        number.bold(),
        title.unwrap_or("(untitled)")
    );
    if let Some(url) = url {
        println!("  URL: {}", url);
    }
    println!("  {}", date_line);
}

#[async_trait]
impl Command for IssuesCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let urls = context.repositories(&self.urls);
        validators::validate_repository_urls(&urls)?;

        let issues = context
            .fetcher()
            .fetch_issues(&urls, self.state, &self.filter)
            .await?;

        if context.json {
            println!("{}", serde_json::to_string_pretty(&issues)?);
            return Ok(());
        }

        if issues.is_empty() {
            println!("{}", "No issues matched".yellow());
            return Ok(());
        }

        println!("{}", format!("Found {} issues", issues.len()).green());
        println!();

        for issue in &issues {
            let mut dates = format!("Created: {}", issue.created_at.format("%Y-%m-%d"));
            if let Some(closed_at) = issue.closed_at {
                dates.push_str(&format!(", closed: {}", closed_at.format("%Y-%m-%d")));
            }
            print_item(issue.number(), issue.title(), issue.html_url(), dates);
        }

        println!();
        println!("{}", format!("Total: {} issues", issues.len()).green());

        Ok(())
    }
}

#[async_trait]
impl Command for PullsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let urls = context.repositories(&self.urls);
        validators::validate_repository_urls(&urls)?;

        let pull_requests = context
            .fetcher()
            .fetch_pull_requests(&urls, self.state, &self.filter)
            .await?;

        if context.json {
            println!("{}", serde_json::to_string_pretty(&pull_requests)?);
            return Ok(());
        }

        if pull_requests.is_empty() {
            println!("{}", "No pull requests matched".yellow());
            return Ok(());
        }

        println!(
            "{}",
            format!("Found {} pull requests", pull_requests.len()).green()
        );
        println!();

        for pr in &pull_requests {
            let mut dates = format!("Created: {}", pr.created_at.format("%Y-%m-%d"));
            if let Some(merged_at) = pr.merged_at {
                dates.push_str(&format!(", merged: {}", merged_at.format("%Y-%m-%d")));
            }
            print_item(pr.number(), pr.title(), pr.html_url(), dates);
        }

        println!();
        println!(
            "{}",
            format!("Total: {} pull requests", pull_requests.len()).green()
        );

        Ok(())
    }
}
