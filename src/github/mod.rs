//! GitHub collection queries and reports
//!
//! Low-level requests live in the `metrics-github` crate. This module adds
//! the client-side layer on top of it:
//!
//! - [`fetcher`]: `CollectionFetcher` and the per-resource fetch operations
//! - [`analytics`]: weekly histograms, top-N rankings and unique contributors
//! - [`types`]: result types for the reports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gh_metrics::github::{CollectionFetcher, IssueDate};
//! use metrics_github::GitHubClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let fetcher = CollectionFetcher::new(GitHubClient::new(None));
//! let urls = vec!["https://github.com/rust-lang/rust".to_string()];
//!
//! for bucket in fetcher.weekly_issue_histogram(&urls, 4, IssueDate::Created).await? {
//!     println!("{}: {}", bucket.week_start, bucket.count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod fetcher;
pub mod types;

// Re-export commonly used items for convenience
pub use analytics::{rank, unique_contributors, with_total};
pub use fetcher::CollectionFetcher;
pub use types::{IssueDate, PullRequestDate, RankingEntry, WeekStart, WeeklyBucket};
