use std::time::Duration;

use anyhow::{Context, Result};

use crate::errors::SubmitError;
use crate::profile_client::DEFAULT_TIMEOUT_SECS;

/// Client configuration loaded from environment variables (and `.env` if present).
/// Endpoints are optional; a missing one surfaces as a failed result when used.
#[derive(Debug, Clone)]
pub struct Config {
    pub save_data_url: Option<String>,
    pub get_user_url: Option<String>,
    pub request_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let request_timeout = match non_blank("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            save_data_url: non_blank("SAVE_DATA_URL"),
            get_user_url: non_blank("GET_USER_URL"),
            request_timeout: Duration::from_secs(request_timeout),
            rust_log: non_blank("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn save_endpoint(&self) -> Result<&str, SubmitError> {
        self.save_data_url.as_deref().ok_or(SubmitError::NotConfigured(
            "Save endpoint URL is not configured. Set SAVE_DATA_URL.",
        ))
    }

    pub fn fetch_endpoint(&self) -> Result<&str, SubmitError> {
        self.get_user_url.as_deref().ok_or(SubmitError::NotConfigured(
            "Fetch endpoint URL is not configured. Set GET_USER_URL.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.rust_log, "info");
        assert!(config.save_data_url.is_none());
        assert_eq!(config.save_endpoint().unwrap_err().status_code(), 500);
    }

    #[test]
    fn test_blank_url_counts_as_missing() {
        let config = config_from(&[("SAVE_DATA_URL", "  ")]).unwrap();
        assert!(config.save_endpoint().is_err());
    }

    #[test]
    fn test_reads_endpoints_and_timeout() {
        let config = config_from(&[
            ("SAVE_DATA_URL", "https://api.example.com/save-user"),
            ("GET_USER_URL", "https://api.example.com/get-user"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.save_endpoint().unwrap(), "https://api.example.com/save-user");
        assert_eq!(config.fetch_endpoint().unwrap(), "https://api.example.com/get-user");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_bad_timeout() {
        assert!(config_from(&[("REQUEST_TIMEOUT_SECS", "soon")]).is_err());
    }
}
