//! GitHub client implementation

use crate::API_BASE;

/// GitHub API client for making optionally authenticated requests
///
/// The credential is handed in by the caller; the client never consults
/// process-wide state. Without a token every request runs unauthenticated
/// against the lower anonymous quota.
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
    pub(crate) api_base: String,
}

impl GitHubClient {
    /// Create a new GitHub client talking to `https://api.github.com`
    pub fn new(token: Option<String>) -> Self {
        Self::with_api_base(token, API_BASE)
    }

    /// Create a client against a different API root (GitHub Enterprise or a test stub)
    pub fn with_api_base(token: Option<String>, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            client: reqwest::Client::new(),
            token: token.filter(|token| !token.is_empty()),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Check if the client has a token configured
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// API root every request path is appended to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(None)
    }
}
