//! Thermostat domain service
//!
//! Orchestrates the backend API client and the cache into the three read
//! operations used by the web layer. Only the current-state read carries the
//! cache fallback: it is the dashboard's primary view and must degrade to
//! the last good snapshot when the backend is down. History and health are
//! secondary reads whose failures surface directly to the caller.

use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::cache::Cache;
use crate::client::{ApiClient, ApiError};

/// Cache key holding the last good state response
const CACHE_KEY_ESTADO: &str = "estado";

/// Deadline for history requests, which can return many records
const HISTORIAL_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for backend health probes; liveness answers must be fast
const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

/// Outcome of a current-state lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Estado {
    /// Raw state payload, or `None` when backend and cache both came up empty
    pub datos: Option<Value>,
    /// When the payload was captured from the backend (UTC, RFC 3339)
    pub timestamp: Option<String>,
    /// True when the payload was served from the cache fallback
    pub from_cache: bool,
}

/// Record stored under the state cache key
#[derive(Debug, Deserialize)]
struct EstadoCacheado {
    datos: Value,
    timestamp: String,
}

/// Service that manages the thermostat data flows
///
/// Both collaborators are injected, so tests swap in
/// [`MockApiClient`](crate::client::MockApiClient) and a fresh cache without
/// any network machinery. One instance is shared by every request handler.
pub struct TermostatoService {
    api_client: Arc<dyn ApiClient>,
    cache: Arc<dyn Cache>,
}

impl TermostatoService {
    /// Creates a service from its injected collaborators
    pub fn new(api_client: Arc<dyn ApiClient>, cache: Arc<dyn Cache>) -> Self {
        Self { api_client, cache }
    }

    /// Fetches the full thermostat state, falling back to the cache
    ///
    /// Tries the backend first; a good response is stamped with the capture
    /// time and stored as the new fallback snapshot. On any backend failure
    /// the last snapshot is served instead, marked `from_cache`. With no
    /// snapshot available the result is empty rather than an error — the
    /// dashboard renders placeholders, it does not crash.
    ///
    /// Concurrent callers that both miss the cache will both hit the
    /// backend; duplicate reads are cheap and idempotent here, so there is
    /// no request coalescing.
    pub async fn obtener_estado(&self) -> Estado {
        match self.api_client.get("/termostato/", None).await {
            Ok(datos) => {
                let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
                self.cache.set(
                    CACHE_KEY_ESTADO,
                    json!({ "datos": datos.clone(), "timestamp": timestamp.clone() }),
                    None,
                );
                Estado {
                    datos: Some(datos),
                    timestamp: Some(timestamp),
                    from_cache: false,
                }
            }
            Err(err) => {
                warn!("state fetch failed, falling back to cache: {err}");
                let cached = self
                    .cache
                    .get(CACHE_KEY_ESTADO)
                    .and_then(|value| serde_json::from_value::<EstadoCacheado>(value).ok());
                match cached {
                    Some(record) => Estado {
                        datos: Some(record.datos),
                        timestamp: Some(record.timestamp),
                        from_cache: true,
                    },
                    None => Estado {
                        datos: None,
                        timestamp: None,
                        from_cache: false,
                    },
                }
            }
        }
    }

    /// Fetches the temperature history from the backend
    ///
    /// # Arguments
    /// * `limite` - Maximum number of records to request
    ///
    /// # Returns
    /// The backend payload unchanged. History is not cached; failures
    /// propagate so the caller can report them.
    pub async fn obtener_historial(&self, limite: u32) -> Result<Value, ApiError> {
        let path = format!("/termostato/historial/?limite={limite}");
        self.api_client.get(&path, Some(HISTORIAL_TIMEOUT)).await
    }

    /// Probes the backend liveness endpoint
    ///
    /// Returns the backend payload unchanged (status, version, uptime).
    /// Failures propagate so the caller can report a degraded system.
    pub async fn health_check(&self) -> Result<Value, ApiError> {
        self.api_client.get("/comprueba/", Some(HEALTH_TIMEOUT)).await
    }
}
