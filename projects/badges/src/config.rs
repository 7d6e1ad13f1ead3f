use interfaces_github_contributions::index::GitHubGraphQLClient;
use thiserror::Error;
use tracing::debug;

pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const GITHUB_GRAPHQL_URL_VAR: &str = "GITHUB_GRAPHQL_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MissingToken: set the {var} environment variable to a GitHub token")]
    MissingToken { var: &'static str },
}

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Reads the process environment after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup(GITHUB_TOKEN_VAR)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken { var: GITHUB_TOKEN_VAR })?;

        let endpoint = lookup(GITHUB_GRAPHQL_URL_VAR).filter(|url| !url.trim().is_empty());

        Ok(Self { token, endpoint })
    }

    pub fn client(&self) -> GitHubGraphQLClient {
        let client = GitHubGraphQLClient::new(self.token.clone());
        match &self.endpoint {
            Some(endpoint) => client.with_endpoint(endpoint.clone()),
            None => client,
        }
    }
}
