//! reqwest-backed implementation of the backend API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{ApiClient, ApiError};

/// Default per-request timeout when no override is given
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the thermostat backend API
///
/// Resolves logical paths against a base URL whose trailing slash is trimmed
/// at construction, so joined URLs never double the separator. Transport
/// failures are classified into the [`ApiError`] taxonomy.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpApiClient {
    /// Creates a client with the default 5-second timeout
    ///
    /// # Arguments
    /// * `base_url` - Backend base URL (e.g. `http://localhost:5050`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom default timeout
    ///
    /// # Arguments
    /// * `base_url` - Backend base URL; a trailing slash is trimmed
    /// * `timeout` - Deadline applied to calls without a per-call override
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            timeout,
        }
    }

    /// Joins the base URL with a resource path
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a reqwest failure onto the error taxonomy
    fn classify(url: &str, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_connect() {
            ApiError::Connection {
                url: url.to_string(),
            }
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
        } else if err.is_decode() {
            ApiError::Decode {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            ApiError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, path: &str, timeout: Option<Duration>) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        let timeout = timeout.unwrap_or(self.timeout);

        let response = self
            .client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| Self::classify(&url, err))?;

        let response = response
            .error_for_status()
            .map_err(|err| Self::classify(&url, err))?;

        response
            .json()
            .await
            .map_err(|err| Self::classify(&url, err))
    }
}
