//! Deterministic test double for the backend API client

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiClient, ApiError};

/// ApiClient double that returns a canned payload or a canned error
///
/// Never performs network I/O. Every call increments a counter and records
/// the requested path, so tests can assert both how often the backend was
/// hit and with which resource paths. Lives in the library rather than
/// behind `#[cfg(test)]` so service and router tests can compose it.
#[derive(Debug, Default)]
pub struct MockApiClient {
    payload: Value,
    error: Option<ApiError>,
    calls: AtomicUsize,
    paths: Mutex<Vec<String>>,
}

impl MockApiClient {
    /// Creates a double whose every call succeeds with the given payload
    pub fn returning(payload: Value) -> Self {
        Self {
            payload,
            ..Self::default()
        }
    }

    /// Creates a double whose every call fails with the given error
    pub fn failing(error: ApiError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Paths requested so far, in call order
    pub fn requested_paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn get(&self, path: &str, _timeout: Option<Duration>) -> Result<Value, ApiError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());

        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.payload.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_returning_double_yields_payload() {
        let mock = MockApiClient::returning(json!({"temperatura_ambiente": 22}));

        let result = mock.get("/termostato/", None).await;

        assert_eq!(result, Ok(json!({"temperatura_ambiente": 22})));
    }

    #[tokio::test]
    async fn test_failing_double_yields_configured_error() {
        let error = ApiError::Connection {
            url: "http://localhost:5050/termostato/".to_string(),
        };
        let mock = MockApiClient::failing(error.clone());

        let result = mock.get("/termostato/", None).await;

        assert_eq!(result, Err(error));
    }

    #[tokio::test]
    async fn test_calls_are_counted_and_paths_recorded() {
        let mock = MockApiClient::returning(json!({}));

        let _ = mock.get("/termostato/", None).await;
        let _ = mock.get("/comprueba/", Some(Duration::from_secs(2))).await;

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.requested_paths(), vec!["/termostato/", "/comprueba/"]);
    }
}
