//! Application settings read from the environment

use std::env;
use std::time::Duration;

/// Backend base URL used when no environment variable is set
const DEFAULT_API_URL: &str = "http://localhost:5050";

/// Default per-request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Runtime settings for the dashboard service
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the thermostat backend API
    pub api_url: String,
    /// Default deadline applied to backend requests
    pub api_timeout: Duration,
}

impl Settings {
    /// Loads settings from the environment
    ///
    /// The backend URL is taken from `API_URL` (the name the hosting
    /// platform injects), then `URL_APP_API`, then the localhost default.
    /// `API_TIMEOUT` overrides the request deadline in whole seconds;
    /// unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let api_url = env::var("API_URL")
            .or_else(|_| env::var("URL_APP_API"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_timeout = env::var("API_TIMEOUT")
            .ok()
            .and_then(|value| value.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            api_url,
            api_timeout,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
