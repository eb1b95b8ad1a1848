//! Collaborator and contributor commands

use super::{Command, CommandContext, validators};
use crate::github::unique_contributors;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// List collaborators of each repository
pub struct CollaboratorsCommand {
    pub urls: Vec<String>,
}

/// List contributor statistics, or only the distinct logins
pub struct ContributorsCommand {
    pub urls: Vec<String>,
    pub unique: bool,
}

fn print_logins<'a>(heading: String, logins: impl Iterator<Item = &'a str>) {
    println!("{}", heading.green());
    println!();
    for login in logins {
        println!("{} {}", "•".blue(), login.bold());
    }
}

#[async_trait]
impl Command for CollaboratorsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let urls = context.repositories(&self.urls);
        validators::validate_repository_urls(&urls)?;

        let collaborators = context.fetcher().fetch_collaborators(&urls).await?;

        if context.json {
            println!("{}", serde_json::to_string_pretty(&collaborators)?);
            return Ok(());
        }

        print_logins(
            format!("Found {} collaborators", collaborators.len()),
            collaborators.iter().map(|user| user.login.as_str()),
        );
        Ok(())
    }
}

#[async_trait]
impl Command for ContributorsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let urls = context.repositories(&self.urls);
        validators::validate_repository_urls(&urls)?;

        let contributors = context.fetcher().fetch_contributors(&urls).await?;

        if self.unique {
            let logins = unique_contributors(&contributors);
            if context.json {
                println!("{}", serde_json::to_string_pretty(&logins)?);
            } else {
                print_logins(
                    format!("Found {} unique contributors", logins.len()),
                    logins.iter().map(String::as_str),
                );
            }
            return Ok(());
        }

        if context.json {
            println!("{}", serde_json::to_string_pretty(&contributors)?);
            return Ok(());
        }

        println!(
            "{}",
            format!("Found {} contributors", contributors.len()).green()
        );
        println!();
        for contributor in &contributors {
            println!(
                "{} {} {} commits",
                "•".blue(),
                contributor.login().unwrap_or("(unknown)").bold(),
                contributor.total.to_string().cyan()
            );
        }
        Ok(())
    }
}
