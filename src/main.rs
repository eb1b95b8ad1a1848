use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use gh_metrics::commands::*;
use gh_metrics::config::Settings;
use gh_metrics::constants;
use gh_metrics::github::{IssueDate, PullRequestDate};
use gh_metrics::utils::{DateFilter, parse_date};
use metrics_github::State;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gh-metrics")]
#[command(about = "Issue, pull request and people metrics from the GitHub REST API")]
#[command(version)]
struct Cli {
    /// Configuration file path (default: gh-metrics.yaml, if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// GitHub token (overrides the config file and GITHUB_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Output in JSON format for machine consumption
    #[arg(long, global = true)]
    json: bool,

    /// Log every request to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List issues, excluding pull requests
    Issues {
        /// Repository URLs (default: repositories from the config file)
        urls: Vec<String>,

        /// Issue state: open, closed or all
        #[arg(long, default_value = "open")]
        state: State,

        /// Only issues created on or after this date
        #[arg(long, value_parser = parse_date)]
        created_after: Option<DateTime<Utc>>,

        /// Only issues created on or before this date
        #[arg(long, value_parser = parse_date)]
        created_before: Option<DateTime<Utc>>,

        /// Only issues closed on or after this date
        #[arg(long, value_parser = parse_date)]
        closed_after: Option<DateTime<Utc>>,

        /// Only issues closed on or before this date
        #[arg(long, value_parser = parse_date)]
        closed_before: Option<DateTime<Utc>>,
    },

    /// List pull requests
    Pulls {
        /// Repository URLs (default: repositories from the config file)
        urls: Vec<String>,

        /// Pull request state: open, closed or all
        #[arg(long, default_value = "open")]
        state: State,

        /// Only pull requests created on or after this date
        #[arg(long, value_parser = parse_date)]
        created_after: Option<DateTime<Utc>>,

        /// Only pull requests created on or before this date
        #[arg(long, value_parser = parse_date)]
        created_before: Option<DateTime<Utc>>,

        /// Only pull requests merged on or after this date
        #[arg(long, value_parser = parse_date)]
        merged_after: Option<DateTime<Utc>>,

        /// Only pull requests merged on or before this date
        #[arg(long, value_parser = parse_date)]
        merged_before: Option<DateTime<Utc>>,
    },

    /// Count issues per trailing week
    WeeklyIssues {
        /// Repository URLs (default: repositories from the config file)
        urls: Vec<String>,

        /// Number of trailing weeks (at least 1)
        #[arg(short, long, default_value_t = constants::reports::DEFAULT_WEEKS)]
        weeks: usize,

        /// Bucket on the created or closed date
        #[arg(long, default_value = "created")]
        by: IssueDate,
    },

    /// Count pull requests per trailing week
    WeeklyPulls {
        /// Repository URLs (default: repositories from the config file)
        urls: Vec<String>,

        /// Number of trailing weeks (at least 1)
        #[arg(short, long, default_value_t = constants::reports::DEFAULT_WEEKS)]
        weeks: usize,

        /// Bucket on the created or merged date
        #[arg(long, default_value = "created")]
        by: PullRequestDate,
    },

    /// Rank repositories by issue count
    TopIssues {
        /// Repository URLs (default: repositories from the config file)
        urls: Vec<String>,

        /// Issue state: open, closed or all
        #[arg(long, default_value = "open")]
        state: State,

        /// Only issues created on or after this date
        #[arg(long, value_parser = parse_date)]
        created_after: Option<DateTime<Utc>>,

        /// Only issues closed on or after this date
        #[arg(long, value_parser = parse_date)]
        closed_after: Option<DateTime<Utc>>,

        /// Show only the first N repositories
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Rank repositories by pull request count
    TopPulls {
        /// Repository URLs (default: repositories from the config file)
        urls: Vec<String>,

        /// Pull request state: open, closed or all
        #[arg(long, default_value = "open")]
        state: State,

        /// Only pull requests created on or after this date
        #[arg(long, value_parser = parse_date)]
        created_after: Option<DateTime<Utc>>,

        /// Only pull requests merged on or after this date
        #[arg(long, value_parser = parse_date)]
        merged_after: Option<DateTime<Utc>>,

        /// Show only the first N repositories
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List repository collaborators
    Collaborators {
        /// Repository URLs (default: repositories from the config file)
        urls: Vec<String>,
    },

    /// List repository contributors
    Contributors {
        /// Repository URLs (default: repositories from the config file)
        urls: Vec<String>,

        /// Print each contributor login once
        #[arg(long)]
        unique: bool,
    },

    /// List organization members
    Members {
        /// Organization (default: organization from the config file)
        organization: Option<String>,
    },

    /// List organization teams
    Teams {
        /// Organization (default: organization from the config file)
        organization: Option<String>,
    },

    /// List members of a team
    TeamMembers {
        /// Team name or slug
        team: String,

        /// Organization (default: organization from the config file)
        #[arg(short, long)]
        organization: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "gh_metrics=debug,metrics_github=debug"
    } else {
        "gh_metrics=warn,metrics_github=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::resolve(cli.config.as_deref(), cli.token)?;
    let context = CommandContext::new(settings, cli.json);

    execute_command(cli.command, &context).await
}

async fn execute_command(command: Commands, context: &CommandContext) -> Result<()> {
    match command {
        Commands::Issues {
            urls,
            state,
            created_after,
            created_before,
            closed_after,
            closed_before,
        } => {
            let filter = DateFilter {
                created_on_or_after: created_after,
                created_on_or_before: created_before,
                finished_on_or_after: closed_after,
                finished_on_or_before: closed_before,
            };
            IssuesCommand {
                urls,
                state,
                filter,
            }
            .execute(context)
            .await?;
        }
        Commands::Pulls {
            urls,
            state,
            created_after,
            created_before,
            merged_after,
            merged_before,
        } => {
            let filter = DateFilter {
                created_on_or_after: created_after,
                created_on_or_before: created_before,
                finished_on_or_after: merged_after,
                finished_on_or_before: merged_before,
            };
            PullsCommand {
                urls,
                state,
                filter,
            }
            .execute(context)
            .await?;
        }
        Commands::WeeklyIssues { urls, weeks, by } => {
            WeeklyCommand {
                urls,
                weeks,
                kind: HistogramKind::Issues(by),
            }
            .execute(context)
            .await?;
        }
        Commands::WeeklyPulls { urls, weeks, by } => {
            WeeklyCommand {
                urls,
                weeks,
                kind: HistogramKind::PullRequests(by),
            }
            .execute(context)
            .await?;
        }
        Commands::TopIssues {
            urls,
            state,
            created_after,
            closed_after,
            limit,
        } => {
            TopCommand {
                urls,
                kind: RankingKind::Issues,
                state,
                created_on_or_after: created_after,
                finished_on_or_after: closed_after,
                limit,
            }
            .execute(context)
            .await?;
        }
        Commands::TopPulls {
            urls,
            state,
            created_after,
            merged_after,
            limit,
        } => {
            TopCommand {
                urls,
                kind: RankingKind::PullRequests,
                state,
                created_on_or_after: created_after,
                finished_on_or_after: merged_after,
                limit,
            }
            .execute(context)
            .await?;
        }
        Commands::Collaborators { urls } => {
            CollaboratorsCommand { urls }.execute(context).await?;
        }
        Commands::Contributors { urls, unique } => {
            ContributorsCommand { urls, unique }
                .execute(context)
                .await?;
        }
        Commands::Members { organization } => {
            MembersCommand { organization }.execute(context).await?;
        }
        Commands::Teams { organization } => {
            TeamsCommand { organization }.execute(context).await?;
        }
        Commands::TeamMembers { team, organization } => {
            TeamMembersCommand { organization, team }
                .execute(context)
                .await?;
        }
    }

    Ok(())
}
