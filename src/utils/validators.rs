//! Settings validation utilities
//!
//! Validation collects every problem it finds instead of stopping at the
//! first one, so a bad configuration file can be fixed in a single pass.

use crate::config::Settings;
use anyhow::anyhow;
use metrics_github::parse_github_url;
use std::collections::HashSet;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// API base URL is not an http(s) URL
    InvalidApiBase(String),
    /// Repository URL is empty or whitespace-only
    EmptyRepositoryUrl,
    /// Repository URL cannot be parsed into owner and name
    InvalidRepositoryUrl(String),
    /// The same repository URL is listed twice
    DuplicateRepositoryUrl(String),
    /// Organization is present but blank
    EmptyOrganization,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidApiBase(url) => {
                write!(f, "API base must start with http:// or https://: '{}'", url)
            }
            ValidationError::EmptyRepositoryUrl => {
                write!(f, "Repository URL cannot be empty")
            }
            ValidationError::InvalidRepositoryUrl(url) => {
                write!(f, "Invalid repository URL: '{}'", url)
            }
            ValidationError::DuplicateRepositoryUrl(url) => {
                write!(f, "Duplicate repository URL: '{}'", url)
            }
            ValidationError::EmptyOrganization => {
                write!(f, "Organization cannot be empty")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a complete settings object
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(error) = validate_api_base(&settings.api_base) {
        errors.push(error);
    }

    if let Err(mut url_errors) = validate_repository_urls(&settings.repositories) {
        errors.append(&mut url_errors);
    }

    if settings
        .organization
        .as_deref()
        .is_some_and(|org| org.trim().is_empty())
    {
        errors.push(ValidationError::EmptyOrganization);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_api_base(api_base: &str) -> Result<(), ValidationError> {
    if api_base.starts_with("https://") || api_base.starts_with("http://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidApiBase(api_base.to_string()))
    }
}

/// Validates a list of repository URLs
///
/// Every URL must parse into owner and name and appear only once.
pub fn validate_repository_urls(urls: &[String]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for url in urls {
        if url.trim().is_empty() {
            errors.push(ValidationError::EmptyRepositoryUrl);
            continue;
        }

        if parse_github_url(url).is_err() {
            errors.push(ValidationError::InvalidRepositoryUrl(url.clone()));
        } else if !seen.insert(url.as_str()) {
            errors.push(ValidationError::DuplicateRepositoryUrl(url.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Converts validation errors to a user-friendly anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
