//! HTTP client abstraction for the thermostat backend API
//!
//! This module defines the `ApiClient` capability contract, the error
//! taxonomy for backend failures, and two implementations: a reqwest-backed
//! client for production and a deterministic double for tests. Services
//! depend on the contract only, so the real client can be swapped without
//! touching them.

mod http;
mod mock;

pub use http::HttpApiClient;
pub use mock::MockApiClient;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors raised when talking to the backend API
///
/// `Timeout` and `Connection` are the cases callers distinguish for
/// user-facing messages ("slow" vs. "offline"); every other transport or
/// HTTP failure maps to one of the remaining variants. Matching on the enum
/// itself catches all of them uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request exceeded its deadline
    #[error("request to {url} timed out")]
    Timeout {
        /// Full URL of the request that timed out
        url: String,
    },

    /// The backend could not be reached (refused, unreachable, DNS failure)
    #[error("could not connect to {url}")]
    Connection {
        /// Full URL of the request that failed to connect
        url: String,
    },

    /// The backend answered with a non-success HTTP status
    #[error("backend returned HTTP {status} for {url}")]
    Status {
        /// The HTTP status code received
        status: u16,
        /// Full URL of the request
        url: String,
    },

    /// The response body could not be decoded as JSON
    #[error("invalid JSON from {url}: {message}")]
    Decode {
        /// Full URL of the request
        url: String,
        /// Description of the decoding failure
        message: String,
    },

    /// Any other transport-level failure
    #[error("transport error for {url}: {message}")]
    Transport {
        /// Full URL of the request
        url: String,
        /// Description of the transport failure
        message: String,
    },
}

/// Capability contract for fetching JSON payloads from the backend
///
/// Implementations resolve a logical path against their configured backend
/// and return the decoded JSON body. The production implementation is
/// [`HttpApiClient`]; [`MockApiClient`] provides canned responses for tests.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Performs a GET request for a logical resource path
    ///
    /// # Arguments
    /// * `path` - Path relative to the backend base URL (e.g. `/termostato/`)
    /// * `timeout` - Per-call deadline; `None` uses the configured default
    ///
    /// # Returns
    /// * `Ok(Value)` - The decoded JSON payload
    /// * `Err(ApiError)` - Classified transport or HTTP failure
    async fn get(&self, path: &str, timeout: Option<Duration>) -> Result<Value, ApiError>;
}
