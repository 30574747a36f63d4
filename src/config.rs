use serde::Deserialize;
use std::time::Duration;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// RapidAPI key for the Streaming Availability API
    pub rapidapi_key: String,

    /// Streaming Availability API base URL
    #[serde(default = "default_streaming_api_url")]
    pub streaming_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Country used when a request doesn't name one
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Language the provider should localize titles and overviews into
    #[serde(default = "default_output_language")]
    pub output_language: String,

    /// Timeout for a single provider request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Keep rent and buy offers when normalizing streaming options
    #[serde(default)]
    pub include_purchase_options: bool,

    /// Quiet period before a live search query is sent, in milliseconds
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_streaming_api_url() -> String {
    "https://streaming-availability.p.rapidapi.com".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_country() -> String {
    "us".to_string()
}

fn default_output_language() -> String {
    "en".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit list of variables (used by tests)
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.rapidapi_key.trim().is_empty() {
            return Err(AppError::Config("RAPIDAPI_KEY must not be empty".to_string()));
        }
        if self.default_country.trim().is_empty() {
            return Err(AppError::Config(
                "DEFAULT_COUNTRY must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_vars(vars(&[("RAPIDAPI_KEY", "secret")])).unwrap();

        assert_eq!(config.rapidapi_key, "secret");
        assert_eq!(
            config.streaming_api_url,
            "https://streaming-availability.p.rapidapi.com"
        );
        assert_eq!(config.default_country, "us");
        assert_eq!(config.output_language, "en");
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert!(!config.include_purchase_options);
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = Config::from_vars(vars(&[("PORT", "8080")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let result = Config::from_vars(vars(&[("RAPIDAPI_KEY", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("RAPIDAPI_KEY", "secret"),
            ("PORT", "8080"),
            ("DEFAULT_COUNTRY", "jp"),
            ("INCLUDE_PURCHASE_OPTIONS", "true"),
            ("SEARCH_DEBOUNCE_MS", "500"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.default_country, "jp");
        assert!(config.include_purchase_options);
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
    }
}
