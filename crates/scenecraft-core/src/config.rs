//! Runtime configuration
//!
//! Everything comes from the environment; nothing is persisted. The
//! upstream API key is deliberately optional at startup — its absence
//! surfaces per request as an upstream failure, matching the deployed
//! behavior where the process boots without credentials.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default chat-completion model requested from the provider
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";

/// Default provider API root
pub const DEFAULT_UPSTREAM_URL: &str = "https://openrouter.ai/api/v1";

/// Default upper bound on one upstream call
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(90);

/// Shared username/password pair protecting static assets
///
/// A single configuration-held credential, not a session or identity
/// system. Compared against every protected static GET.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCredential {
    /// Expected username
    pub username: String,
    /// Expected password
    pub password: String,
}

impl AccessCredential {
    /// Check a presented pair against the stored one
    #[inline]
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Backend configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API key; `None` until operators set it
    pub api_key: Option<String>,
    /// Model identifier sent with every completion request
    pub model: String,
    /// Provider API root (no trailing slash)
    pub upstream_url: String,
    /// Upper bound on one upstream call
    pub upstream_timeout: Duration,
    /// Credential gating static assets
    pub credential: AccessCredential,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from the environment, filling defaults
    ///
    /// Recognized variables: `OPENROUTER_API_KEY`, `OPENROUTER_MODEL`,
    /// `SCENECRAFT_USERNAME`, `SCENECRAFT_PASSWORD`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned()),
            upstream_url: DEFAULT_UPSTREAM_URL.to_owned(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            credential: AccessCredential {
                username: env::var("SCENECRAFT_USERNAME")
                    .unwrap_or_else(|_| "scenecraft".to_owned()),
                password: env::var("SCENECRAFT_PASSWORD")
                    .unwrap_or_else(|_| "SCENECRAFT-2024".to_owned()),
            },
            allowed_origins: vec![
                "https://scenecraft-ai.com".to_owned(),
                "https://www.scenecraft-ai.com".to_owned(),
            ],
        }
    }

    /// With an explicit API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// With an explicit credential pair
    #[inline]
    #[must_use]
    pub fn with_credential(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credential = AccessCredential {
            username: username.into(),
            password: password.into(),
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_verify() {
        let cred = AccessCredential {
            username: "scenecraft".to_owned(),
            password: "secret".to_owned(),
        };
        assert!(cred.verify("scenecraft", "secret"));
        assert!(!cred.verify("scenecraft", "wrong"));
        assert!(!cred.verify("other", "secret"));
        assert!(!cred.verify("Scenecraft", "secret"));
    }

    #[test]
    fn config_builders() {
        let config = Config::from_env()
            .with_api_key("sk-test")
            .with_credential("u", "p");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert!(config.credential.verify("u", "p"));
        assert_eq!(config.upstream_timeout, DEFAULT_UPSTREAM_TIMEOUT);
    }
}
