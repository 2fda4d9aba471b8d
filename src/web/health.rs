//! System health endpoint covering frontend and backend

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use tracing::warn;

use super::AppState;

/// Frontend version reported alongside the backend's
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `GET /health` — liveness of the whole system
///
/// The frontend is trivially "ok" if this handler runs; the interesting
/// part is the backend probe, bounded by the service's 2-second deadline.
/// A reachable backend yields 200/"ok"; an unreachable one yields
/// 503/"degraded" — the frontend itself is still up, its dependency is not.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    match state.service.health_check().await {
        Ok(backend) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": timestamp,
                "frontend": {
                    "version": VERSION,
                    "status": "ok",
                },
                "backend": {
                    "status": backend.get("status").cloned().unwrap_or_else(|| json!("unknown")),
                    "version": backend.get("version").cloned().unwrap_or_else(|| json!("unknown")),
                    "uptime_seconds": backend.get("uptime_seconds").cloned().unwrap_or(Value::Null),
                    "url": state.api_url,
                },
            })),
        ),
        Err(err) => {
            warn!("backend health check failed: {err}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": timestamp,
                    "frontend": {
                        "version": VERSION,
                        "status": "ok",
                    },
                    "backend": {
                        "status": "unavailable",
                        "error": err.to_string(),
                        "url": state.api_url,
                    },
                })),
            )
        }
    }
}
