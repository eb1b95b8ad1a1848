//! Settings file loading

use crate::constants;
use crate::utils::validators;
use anyhow::{Context, Result};
use metrics_github::GitHubClient;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_api_base() -> String {
    constants::github::API_BASE.to_string()
}

/// Settings shared by every command
///
/// The token is the default credential for every request. It is resolved
/// once, when the settings are built, and handed to the client explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Repository URLs used when a command is given none
    #[serde(default)]
    pub repositories: Vec<String>,
    /// Organization used when a command is given none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl Settings {
    /// Load settings from a YAML file and validate them
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the settings a command runs with
    ///
    /// An explicitly named config file must exist; the default file is used
    /// only if present. The token comes from `token_override`, then the
    /// file, then the `GITHUB_TOKEN` environment variable.
    pub fn resolve(config_path: Option<&str>, token_override: Option<String>) -> Result<Self> {
        let mut settings = match config_path {
            Some(path) => Self::load(path)?,
            None if Path::new(constants::config::DEFAULT_CONFIG_FILE).exists() => {
                Self::load(constants::config::DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        settings.token = token_override
            .or(settings.token.take())
            .or_else(|| std::env::var(constants::github::TOKEN_ENV).ok())
            .filter(|token| !token.trim().is_empty());

        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        validators::validate_settings(self).map_err(validators::validation_errors_to_anyhow)
    }

    /// Create a client carrying this configuration's credential and API root
    pub fn client(&self) -> GitHubClient {
        GitHubClient::with_api_base(self.token.clone(), self.api_base.clone())
    }

    /// URLs given on the command line, or the configured list when there are none
    pub fn repositories_or_default(&self, urls: &[String]) -> Vec<String> {
        if urls.is_empty() {
            self.repositories.clone()
        } else {
            urls.to_vec()
        }
    }

    /// Organization given on the command line, or the configured one
    pub fn organization_or_default(&self, organization: Option<&str>) -> Option<String> {
        organization
            .map(str::to_string)
            .or_else(|| self.organization.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: None,
            api_base: default_api_base(),
            repositories: Vec::new(),
            organization: None,
        }
    }
}
