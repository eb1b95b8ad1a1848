//! Organization commands: members, teams and team members

use super::{Command, CommandContext, validators};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// List members of an organization
pub struct MembersCommand {
    pub organization: Option<String>,
}

/// List teams of an organization
pub struct TeamsCommand {
    pub organization: Option<String>,
}

/// List members of one team in an organization
pub struct TeamMembersCommand {
    pub organization: Option<String>,
    pub team: String,
}

fn resolve_organization(context: &CommandContext, given: Option<&str>) -> Result<String> {
    validators::validate_organization(context.settings.organization_or_default(given))
}

#[async_trait]
impl Command for MembersCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let organization = resolve_organization(context, self.organization.as_deref())?;
        let members = context.fetcher().fetch_org_members(&organization).await?;

        if context.json {
            println!("{}", serde_json::to_string_pretty(&members)?);
            return Ok(());
        }

        println!(
            "{}",
            format!("{} has {} members", organization, members.len()).green()
        );
        println!();
        for member in &members {
            println!("{} {}", "•".blue(), member.login.bold());
        }
        Ok(())
    }
}

#[async_trait]
impl Command for TeamsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let organization = resolve_organization(context, self.organization.as_deref())?;
        let teams = context.fetcher().fetch_teams(&organization).await?;

        if context.json {
            println!("{}", serde_json::to_string_pretty(&teams)?);
            return Ok(());
        }

        println!(
            "{}",
            format!("{} has {} teams", organization, teams.len()).green()
        );
        println!();
        for team in &teams {
            println!("{} {} ({})", "•".blue(), team.name.bold(), team.slug);
        }
        Ok(())
    }
}

#[async_trait]
impl Command for TeamMembersCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let organization = resolve_organization(context, self.organization.as_deref())?;
        let members = context
            .fetcher()
            .fetch_team_members(&organization, &self.team)
            .await?;

        if context.json {
            println!("{}", serde_json::to_string_pretty(&members)?);
            return Ok(());
        }

        println!(
            "{}",
            format!(
                "Team {} in {} has {} members",
                self.team,
                organization,
                members.len()
            )
            .green()
        );
        println!();
        for member in &members {
            println!("{} {}", "•".blue(), member.login.bold());
        }
        Ok(())
    }
}
