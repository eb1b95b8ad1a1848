//! Utility functions for GitHub operations

use anyhow::{Result, anyhow};
use std::fmt;

/// Owner and name of a repository, as parsed from its URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parse GitHub URL to extract owner and repository name
///
/// Supports various GitHub URL formats:
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git`, including deeper links such
///   as `https://github.com/owner/repo/issues`
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns an error if the URL format is not recognized
pub fn parse_github_url(url: &str) -> Result<RepositoryRef> {
    let trimmed = url.trim().trim_end_matches('/').trim_end_matches(".git");

    let pair = |owner: &str, name: &str| {
        (!owner.is_empty() && !name.is_empty()).then(|| RepositoryRef::new(owner, name))
    };

    // Handle SSH URLs: git@github.com:owner/repo or git@github-enterprise:owner/repo
    if trimmed.starts_with("git@")
        && let Some(colon_pos) = trimmed.find(':')
    {
        let after_colon = &trimmed[colon_pos + 1..];
        let parts: Vec<&str> = after_colon.split('/').collect();
        if parts.len() == 2
            && let Some(repo) = pair(parts[0], parts[1])
        {
            return Ok(repo);
        }
    }

    // Handle HTTPS URLs: https://github.com/owner/repo or https://github-enterprise/owner/repo
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        let without_protocol = trimmed
            .trim_start_matches("https://")
            .trim_start_matches("http://");

        let parts: Vec<&str> = without_protocol.split('/').collect();
        if parts.len() >= 3
            && let Some(repo) = pair(parts[1], parts[2].trim_end_matches(".git"))
        {
            return Ok(repo);
        }
    }

    // Legacy support: github.com/owner/repo
    if !trimmed.contains("://") && trimmed.starts_with("github.com/") {
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() == 3
            && let Some(repo) = pair(parts[1], parts[2])
        {
            return Ok(repo);
        }
    }

    Err(anyhow!("Invalid GitHub URL format: {}", url))
}
