// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const ENDPOINT_ENV_VAR: &str = "GITHUB_GRAPHQL_URL";
pub const DEFAULT_ACCEPT: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub accept: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            // GitHub rejects requests that carry no user agent
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration, with the endpoint overridden by
    /// `GITHUB_GRAPHQL_URL` when that variable is set and non-empty.
    pub fn from_env() -> Self {
        Self::default().with_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok())
    }

    fn with_endpoint_override(self, endpoint: Option<String>) -> Self {
        match endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => self.endpoint(endpoint.trim()),
            _ => self,
        }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(DEFAULT_ENDPOINT, config.endpoint);
        assert_eq!("application/json", config.accept);
        assert!(config.user_agent.starts_with("githubgql/"));
        assert_eq!(None, config.timeout);
    }

    #[test]
    fn test_endpoint_override() {
        let config =
            ClientConfig::default().with_endpoint_override(Some("http://localhost/graphql".into()));
        assert_eq!("http://localhost/graphql", config.endpoint);

        let config = ClientConfig::default().with_endpoint_override(Some("  ".into()));
        assert_eq!(DEFAULT_ENDPOINT, config.endpoint);

        let config = ClientConfig::default().with_endpoint_override(None);
        assert_eq!(DEFAULT_ENDPOINT, config.endpoint);
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::default()
            .accept("application/vnd.github.merge-info-preview+json")
            .user_agent("my-bot")
            .timeout(Duration::from_secs(30));
        assert_eq!("application/vnd.github.merge-info-preview+json", config.accept);
        assert_eq!("my-bot", config.user_agent);
        assert_eq!(Some(Duration::from_secs(30)), config.timeout);
    }
}
