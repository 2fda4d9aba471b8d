//! JSON endpoints consumed by the dashboard front end

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::AppState;

/// Query parameters accepted by `GET /api/historial`
#[derive(Debug, Deserialize)]
pub struct HistorialParams {
    /// Maximum number of records to return
    #[serde(default = "default_limite")]
    limite: u32,
}

fn default_limite() -> u32 {
    60
}

/// `GET /api/estado` — current thermostat state
///
/// Backs the AJAX refresh of the dashboard. `from_cache` tells the front
/// end when it is looking at the fallback snapshot rather than live data.
/// Answers 503 only when neither the backend nor the cache had anything.
pub async fn estado(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let estado = state.service.obtener_estado().await;

    match estado.datos {
        Some(datos) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": datos,
                "timestamp": estado.timestamp,
                "from_cache": estado.from_cache,
            })),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "No se pudo conectar con la API del termostato",
                "timestamp": estado.timestamp,
            })),
        ),
    }
}

/// `GET /api/historial` — temperature history
///
/// Passes the backend's record list through. History is not cached, so a
/// backend failure surfaces as 503 with an empty list for the chart to
/// render.
pub async fn historial(
    State(state): State<AppState>,
    Query(params): Query<HistorialParams>,
) -> (StatusCode, Json<Value>) {
    match state.service.obtener_historial(params.limite).await {
        Ok(datos) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "historial": datos.get("historial").cloned().unwrap_or_else(|| json!([])),
                "total": datos.get("total").cloned().unwrap_or_else(|| json!(0)),
            })),
        ),
        Err(err) => {
            warn!("history fetch failed: {err}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": format!("No se pudo obtener historial: {err}"),
                    "historial": [],
                })),
            )
        }
    }
}
