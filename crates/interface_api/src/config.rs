//! API configuration

use serde::Deserialize;
use std::path::Path;

use domain_claims::{ClaimError, RuleSetConfig};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Rule set file; the built-in rules are used when unset
    pub rules_path: Option<String>,
    /// Largest number of documents accepted in one batch request
    pub max_batch_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_json: false,
            rules_path: None,
            max_batch_size: 100,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("API"))
    }

    fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Loads the configured rule set, or the built-in one
    pub fn load_rule_set(&self) -> Result<RuleSetConfig, ClaimError> {
        match &self.rules_path {
            Some(path) => RuleSetConfig::load(Path::new(path)),
            None => Ok(RuleSetConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> ApiConfig {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_environment(config::Environment::with_prefix("API").source(Some(map)))
            .unwrap()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = load(&[]);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(!config.log_json);
        assert_eq!(config.rules_path, None);
        assert_eq!(config.max_batch_size, 100);
    }

    #[test]
    fn test_reads_prefixed_variables() {
        let config = load(&[
            ("API_PORT", "9000"),
            ("API_LOG_JSON", "true"),
            ("API_RULES_PATH", "/etc/fnol/rules.toml"),
        ]);
        assert_eq!(config.port, 9000);
        assert!(config.log_json);
        assert_eq!(config.rules_path.as_deref(), Some("/etc/fnol/rules.toml"));
    }
}
