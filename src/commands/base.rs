//! Base types and traits for the command pattern

use crate::config::Settings;
use crate::github::CollectionFetcher;
use anyhow::Result;

/// Context passed to all commands containing shared configuration and options
#[derive(Clone)]
pub struct CommandContext {
    /// The resolved settings, including the default credential
    pub settings: Settings,
    /// Print machine-readable JSON instead of colored text
    pub json: bool,
}

impl CommandContext {
    pub fn new(settings: Settings, json: bool) -> Self {
        Self { settings, json }
    }

    /// A fetcher bound to this context's credential and API root
    pub fn fetcher(&self) -> CollectionFetcher {
        CollectionFetcher::from_settings(&self.settings)
    }

    /// Repository URLs to operate on: the given ones, or the configured list
    pub fn repositories(&self, urls: &[String]) -> Vec<String> {
        self.settings.repositories_or_default(urls)
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
