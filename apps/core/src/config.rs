//! Runtime configuration.
//!
//! Read from the environment (after loading an optional `.env` file) and
//! validated before use. A missing API key is not an error: it means every
//! model call is skipped and the deterministic fallbacks answer.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;
use validator::Validate;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// API key for the remote model; `None` runs offline
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API
    #[validate(length(min = 1))]
    pub base_url: String,
    /// Model identifier sent with each request
    #[validate(length(min = 1))]
    pub model: String,
    /// Timeout for a single model request, in seconds
    #[validate(range(min = 1, max = 600))]
    pub request_timeout_secs: u64,
    /// Default summary length in words
    #[validate(range(min = 1))]
    pub summary_words: usize,
    /// Default number of keywords
    #[validate(range(min = 1))]
    pub keyword_count: usize,
    /// Default number of word-cloud terms
    #[validate(range(min = 1))]
    pub cloud_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: 60,
            summary_words: 100,
            keyword_count: 10,
            cloud_words: 50,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the environment
    pub fn load() -> Result<Self, AppError> {
        match dotenv::dotenv() {
            Ok(path) => info!("Loaded environment from {:?}", path),
            Err(e) => debug!("No .env file loaded: {}", e),
        }
        Self::from_env()
    }

    /// Build the configuration from environment variables only
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            api_key: env::var("OPENAI_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            base_url: env::var("DOCSUM_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("DOCSUM_MODEL").unwrap_or(defaults.model),
            request_timeout_secs: parse_var("DOCSUM_TIMEOUT_SECS", defaults.request_timeout_secs)?,
            summary_words: parse_var("DOCSUM_SUMMARY_WORDS", defaults.summary_words)?,
            keyword_count: parse_var("DOCSUM_KEYWORDS", defaults.keyword_count)?,
            cloud_words: parse_var("DOCSUM_CLOUD_WORDS", defaults.cloud_words)?,
        };

        config.validated()
    }

    /// Run field validation and check that the base URL parses
    pub fn validated(self) -> Result<Self, AppError> {
        self.validate()?;
        Url::parse(&self.base_url)?;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_offline(&self) -> bool {
        self.api_key.is_none()
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} is not a valid number: {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 7] = [
        "OPENAI_API_KEY",
        "DOCSUM_BASE_URL",
        "DOCSUM_MODEL",
        "DOCSUM_TIMEOUT_SECS",
        "DOCSUM_SUMMARY_WORDS",
        "DOCSUM_KEYWORDS",
        "DOCSUM_CLOUD_WORDS",
    ];

    /// Every config variable unset except the given overrides
    fn env_with(
        overrides: &[(&'static str, &'static str)],
    ) -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter()
            .map(|name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| *value);
                (*name, value)
            })
            .collect()
    }

    #[test]
    fn test_defaults_offline() {
        temp_env::with_vars(env_with(&[]), || {
            let config = Config::from_env().unwrap();
            assert!(config.is_offline());
            assert_eq!(config.model, DEFAULT_MODEL);
            assert_eq!(config.summary_words, 100);
            assert_eq!(config.request_timeout(), Duration::from_secs(60));
        });
    }

    #[test]
    fn test_overrides() {
        let vars = env_with(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DOCSUM_MODEL", "gpt-4o"),
            ("DOCSUM_SUMMARY_WORDS", "250"),
            ("DOCSUM_BASE_URL", "http://localhost:8080/v1"),
        ]);
        temp_env::with_vars(vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.api_key.as_deref(), Some("sk-test"));
            assert_eq!(config.model, "gpt-4o");
            assert_eq!(config.summary_words, 250);
            assert_eq!(config.base_url, "http://localhost:8080/v1");
        });
    }

    #[test]
    fn test_blank_api_key_is_offline() {
        let vars = env_with(&[("OPENAI_API_KEY", "   ")]);
        temp_env::with_vars(vars, || {
            assert!(Config::from_env().unwrap().is_offline());
        });
    }

    #[test]
    fn test_invalid_number() {
        let vars = env_with(&[("DOCSUM_KEYWORDS", "ten")]);
        temp_env::with_vars(vars, || {
            assert!(matches!(Config::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_out_of_range_timeout() {
        let vars = env_with(&[("DOCSUM_TIMEOUT_SECS", "0")]);
        temp_env::with_vars(vars, || {
            assert!(matches!(Config::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validated(), Err(AppError::Config(_))));
    }
}
