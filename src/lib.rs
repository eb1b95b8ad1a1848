//! gh-metrics - issue, pull request and people metrics from the GitHub REST API

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod github;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Settings;
pub use error::MetricsError;
pub use github::{CollectionFetcher, RankingEntry, WeeklyBucket};
pub use utils::filters::DateFilter;
