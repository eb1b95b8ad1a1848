//! GitHub REST API client library
//!
//! This library provides the low-level building blocks for querying GitHub
//! collections: a thin HTTP client, repository URL parsing and the resource
//! models returned by the endpoints this tool reads.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`requests`]: Single-page collection requests shared by every endpoint
//! - [`issues`]: Repository issue listing
//! - [`pull_requests`]: Repository pull request listing
//! - [`repositories`]: Collaborators and contributor statistics
//! - [`organizations`]: Organization members, teams and team members
//! - [`util`]: Utility functions for GitHub operations
//!
//! Every request fetches exactly one page. Endpoints that accept `per_page`
//! are asked for [`PAGE_SIZE_CAP`] items and log a warning when the cap is
//! reached, since later pages are never requested.

mod client;
mod issues;
mod organizations;
mod pull_requests;
mod repositories;
mod requests;
mod util;

// Re-export public API
pub use client::GitHubClient;
pub use issues::Issue;
pub use organizations::{Team, User};
pub use pull_requests::PullRequest;
pub use repositories::{Author, Contributor};
pub use requests::{PAGE_SIZE_CAP, State, reached_page_cap};
pub use util::{RepositoryRef, parse_github_url};

/// GitHub API base URL
pub const API_BASE: &str = "https://api.github.com";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("gh-metrics/", env!("CARGO_PKG_VERSION"));
