//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;
use crate::infrastructure::adapters::twitter;

/// Bot configuration
///
/// Immutable after startup; constructed once and passed by reference into
/// each component constructor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub twitter: TwitterConfig,
    pub lookups: LookupConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TwitterConfig {
    /// Handle whose mentions the bot tracks, without the leading '@'.
    pub handle: String,
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
    pub base_url: String,
    pub poll_interval_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LookupConfig {
    pub geocode_base_url: String,
    pub geocode_key: Option<String>,
    pub timezone_base_url: String,
    pub timezone_key: Option<String>,
    pub pass_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            twitter: TwitterConfig {
                handle: "flyover_bot".to_string(),
                consumer_key: None,
                consumer_secret: None,
                access_token: None,
                access_token_secret: None,
                base_url: twitter::API_BASE.to_string(),
                poll_interval_seconds: 15,
            },
            lookups: LookupConfig {
                geocode_base_url: "https://maps.googleapis.com".to_string(),
                geocode_key: None,
                timezone_base_url: "https://maps.googleapis.com".to_string(),
                timezone_key: None,
                pass_base_url: "http://api.open-notify.org".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Overlay credentials and the handle from the process environment.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("CONSUMER_KEY") {
            self.twitter.consumer_key = Some(key);
        }
        if let Ok(secret) = std::env::var("CONSUMER_SECRET") {
            self.twitter.consumer_secret = Some(secret);
        }
        if let Ok(token) = std::env::var("ACCESS_TOKEN") {
            self.twitter.access_token = Some(token);
        }
        if let Ok(secret) = std::env::var("ACCESS_TOKEN_SECRET") {
            self.twitter.access_token_secret = Some(secret);
        }
        if let Ok(handle) = std::env::var("TWITTER_HANDLE") {
            self.twitter.handle = handle;
        }
        if let Ok(key) = std::env::var("GOOGLE_GEOCODE") {
            self.lookups.geocode_key = Some(key);
        }
        if let Ok(key) = std::env::var("GOOGLE_TIMEZONE") {
            self.lookups.timezone_key = Some(key);
        }
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// The secrets the running bot cannot do without.
    pub fn required_keys(&self) -> Result<(String, String, String), ConfigError> {
        let access_token = self
            .twitter
            .access_token
            .clone()
            .ok_or_else(|| ConfigError::MissingField("twitter.access-token".to_string()))?;
        let geocode_key = self
            .lookups
            .geocode_key
            .clone()
            .ok_or_else(|| ConfigError::MissingField("lookups.geocode-key".to_string()))?;
        let timezone_key = self
            .lookups
            .timezone_key
            .clone()
            .ok_or_else(|| ConfigError::MissingField("lookups.timezone-key".to_string()))?;

        Ok((access_token, geocode_key, timezone_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_real_endpoints() {
        let config = Config::default();
        assert_eq!(config.twitter.base_url, "https://api.twitter.com/1.1");
        assert_eq!(config.lookups.pass_base_url, "http://api.open-notify.org");
        assert_eq!(config.lookups.geocode_base_url, "https://maps.googleapis.com");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.twitter.handle, config.twitter.handle);
        assert_eq!(parsed.twitter.poll_interval_seconds, 15);
    }

    #[test]
    fn test_required_keys_reports_missing_field() {
        let config = Config::default();
        let err = config.required_keys().unwrap_err();
        assert!(err.to_string().contains("access-token"));
    }
}
