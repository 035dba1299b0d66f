//! services/cli/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The
//! `.env` file is used for local development.

use std::time::Duration;
use tracing::Level;

/// Endpoint queried when `USER_API_URL` is not set. Returns one random user
/// per GET, no parameters, no authentication.
pub const DEFAULT_API_URL: &str = "https://random-data-api.com/api/users/random_user";

const DEFAULT_RETAIN_LIMIT: usize = 64;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub log_level: Level,
    pub retain_limit: usize,
    pub request_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for
    /// development, but this is skipped in test environments to ensure tests
    /// are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("USER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let retain_limit = match lookup("RETAIN_LIMIT") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(limit) if limit >= 1 => limit,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "RETAIN_LIMIT".to_string(),
                        format!("'{}' is not a positive integer", raw),
                    ))
                }
            },
            None => DEFAULT_RETAIN_LIMIT,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs >= 1 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "REQUEST_TIMEOUT_SECS".to_string(),
                        format!("'{}' is not a positive number of seconds", raw),
                    ))
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            log_level,
            retain_limit,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|value| (*value).to_string())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.retain_limit, 64);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("USER_API_URL", "http://localhost:9999/users"),
            ("RUST_LOG", "debug"),
            ("RETAIN_LIMIT", "8"),
            ("REQUEST_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:9999/users");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.retain_limit, 8);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_retain_limit_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("RETAIN_LIMIT", "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(var, _)) if var == "RETAIN_LIMIT"));
    }

    #[test]
    fn zero_request_timeout_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECS", "0")]));
        assert!(
            matches!(result, Err(ConfigError::InvalidValue(var, _)) if var == "REQUEST_TIMEOUT_SECS")
        );
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("RUST_LOG", "chatty")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(var, _)) if var == "RUST_LOG"));
    }
}
