use std::time::Duration;

use crate::error::{PlanError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Output budget for one plan. Seven days of meals plus a grocery list
/// runs to several thousand tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 8000;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(3);

pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_ENDPOINT: &str = "MEAL_PLAN_ENDPOINT";
pub const ENV_MODEL: &str = "MEAL_PLAN_MODEL";
pub const ENV_MAX_TOKENS: &str = "MEAL_PLAN_MAX_TOKENS";
pub const ENV_TIMEOUT_SECS: &str = "MEAL_PLAN_TIMEOUT_SECS";

/// Settings for talking to the text-generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model: String,
    pub api_version: String,
    /// Sent as `x-api-key` when present.
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub progress_interval: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl GenerationConfig {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(endpoint) = get(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(model) = get(ENV_MODEL) {
            config.model = model;
        }
        config.api_key = get(ENV_API_KEY);

        if let Some(raw) = get(ENV_MAX_TOKENS) {
            config.max_tokens = parse_number(ENV_MAX_TOKENS, &raw)?;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            config.timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &raw)?);
        }

        config.check()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        model: Option<String>,
        max_tokens: Option<u32>,
    ) -> Result<Self> {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(max_tokens) = max_tokens {
            self.max_tokens = max_tokens;
        }
        self.check()?;
        Ok(self)
    }

    fn check(&self) -> Result<()> {
        if self.max_tokens == 0 {
            return Err(PlanError::Config("max tokens must be positive".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(PlanError::Config("timeout must be positive".to_string()));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(PlanError::Config(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| PlanError::Config(format!("{key} is not a valid number: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GenerationConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GenerationConfig::default());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_env_values_applied() {
        let config = GenerationConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "sk-test"),
            (ENV_MODEL, "other-model"),
            (ENV_MAX_TOKENS, "4096"),
            (ENV_TIMEOUT_SECS, "30"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "other-model");
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = GenerationConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_bad_number_rejected() {
        let err = GenerationConfig::from_lookup(lookup_from(&[(ENV_MAX_TOKENS, "lots")]))
            .unwrap_err();
        assert!(matches!(err, PlanError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let config = GenerationConfig::default()
            .with_overrides(Some("http://localhost:9000/v1/messages".to_string()), None, Some(1200))
            .unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/v1/messages");
        assert_eq!(config.max_tokens, 1200);
        assert_eq!(config.model, DEFAULT_MODEL);

        assert!(GenerationConfig::default().with_overrides(None, None, Some(0)).is_err());
        assert!(
            GenerationConfig::default()
                .with_overrides(Some("localhost".to_string()), None, None)
                .is_err()
        );
    }
}
