//! Central constants for the gh-metrics application

/// Default values for GitHub operations
pub mod github {
    pub use metrics_github::{API_BASE, DEFAULT_USER_AGENT, PAGE_SIZE_CAP};

    /// Environment variable consulted when no token is configured elsewhere
    pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "gh-metrics.yaml";
}

/// Default values for aggregate reports
pub mod reports {
    /// Trailing weeks covered by a weekly histogram when none is given
    pub const DEFAULT_WEEKS: usize = 12;

    /// Label of the final histogram entry carrying the sum of all weeks
    pub const TOTAL_LABEL: &str = "total";
}
