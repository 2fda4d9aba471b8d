//! Server-rendered dashboard page

use axum::extract::State;
use axum::response::Html;
use serde_json::Value;

use super::AppState;

/// Placeholder when neither the backend nor the cache had any data
const PLACEHOLDER_ERROR: &str = "Error API";

/// Placeholder for a field missing from an otherwise good payload
const PLACEHOLDER_MISSING: &str = "N/A";

/// Display values for the five dashboard fields
struct Dashboard {
    temperatura_ambiente: String,
    temperatura_deseada: String,
    carga_bateria: String,
    indicador_bateria: String,
    estado_climatizador: String,
}

impl Dashboard {
    /// Builds the display values from a state payload
    ///
    /// With no payload at all, every field shows the API-error placeholder;
    /// with a payload, fields it lacks show `N/A` individually.
    fn from_datos(datos: Option<&Value>) -> Self {
        match datos {
            Some(datos) => Self {
                temperatura_ambiente: field(datos, "temperatura_ambiente"),
                temperatura_deseada: field(datos, "temperatura_deseada"),
                carga_bateria: field(datos, "carga_bateria"),
                indicador_bateria: field(datos, "indicador"),
                estado_climatizador: field(datos, "estado_climatizador"),
            },
            None => Self {
                temperatura_ambiente: PLACEHOLDER_ERROR.to_string(),
                temperatura_deseada: PLACEHOLDER_ERROR.to_string(),
                carga_bateria: PLACEHOLDER_ERROR.to_string(),
                indicador_bateria: PLACEHOLDER_ERROR.to_string(),
                estado_climatizador: PLACEHOLDER_ERROR.to_string(),
            },
        }
    }
}

/// Extracts one payload field as display text
fn field(datos: &Value, key: &str) -> String {
    match datos.get(key) {
        None | Some(Value::Null) => PLACEHOLDER_MISSING.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Escapes text for safe interpolation into HTML
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `GET /` — the dashboard page
///
/// Always answers 200: on data absence the fields carry placeholder text
/// instead of the page failing.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let estado = state.service.obtener_estado().await;
    let board = Dashboard::from_datos(estado.datos.as_ref());

    Html(render(&board, estado.timestamp.as_deref()))
}

/// Renders the dashboard HTML
fn render(board: &Dashboard, timestamp: Option<&str>) -> String {
    let updated = match timestamp {
        Some(timestamp) => format!("Última actualización: {}", escape(timestamp)),
        None => "Sin datos del termostato".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Termostato</title>
</head>
<body>
  <main>
    <h1>Termostato</h1>
    <dl>
      <dt>Temperatura ambiente</dt>
      <dd id="temperatura-ambiente">{temperatura_ambiente}</dd>
      <dt>Temperatura deseada</dt>
      <dd id="temperatura-deseada">{temperatura_deseada}</dd>
      <dt>Carga de batería</dt>
      <dd id="carga-bateria">{carga_bateria}</dd>
      <dt>Indicador de batería</dt>
      <dd id="indicador-bateria">{indicador_bateria}</dd>
      <dt>Estado del climatizador</dt>
      <dd id="estado-climatizador">{estado_climatizador}</dd>
    </dl>
    <footer>{updated}</footer>
  </main>
</body>
</html>
"#,
        temperatura_ambiente = escape(&board.temperatura_ambiente),
        temperatura_deseada = escape(&board.temperatura_deseada),
        carga_bateria = escape(&board.carga_bateria),
        indicador_bateria = escape(&board.indicador_bateria),
        estado_climatizador = escape(&board.estado_climatizador),
        updated = updated,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_dashboard_without_data_shows_error_placeholders() {
        let board = Dashboard::from_datos(None);

        assert_eq!(board.temperatura_ambiente, "Error API");
        assert_eq!(board.temperatura_deseada, "Error API");
        assert_eq!(board.carga_bateria, "Error API");
        assert_eq!(board.indicador_bateria, "Error API");
        assert_eq!(board.estado_climatizador, "Error API");
    }

    #[test]
    fn test_dashboard_maps_payload_fields() {
        let datos = json!({
            "temperatura_ambiente": 21.5,
            "temperatura_deseada": 24,
            "carga_bateria": 3.8,
            "indicador": "NORMAL",
            "estado_climatizador": "encendido",
        });

        let board = Dashboard::from_datos(Some(&datos));

        assert_eq!(board.temperatura_ambiente, "21.5");
        assert_eq!(board.temperatura_deseada, "24");
        assert_eq!(board.carga_bateria, "3.8");
        assert_eq!(board.indicador_bateria, "NORMAL");
        assert_eq!(board.estado_climatizador, "encendido");
    }

    #[test]
    fn test_missing_field_in_payload_shows_na() {
        let datos = json!({"temperatura_ambiente": 20});

        let board = Dashboard::from_datos(Some(&datos));

        assert_eq!(board.temperatura_ambiente, "20");
        assert_eq!(board.estado_climatizador, "N/A");
    }

    #[test]
    fn test_render_includes_values_and_timestamp() {
        let datos = json!({"temperatura_ambiente": 21, "indicador": "BAJO"});
        let board = Dashboard::from_datos(Some(&datos));

        let html = render(&board, Some("2026-02-11T10:00:00Z"));

        assert!(html.contains("21"));
        assert!(html.contains("BAJO"));
        assert!(html.contains("2026-02-11T10:00:00Z"));
    }

    #[test]
    fn test_render_without_timestamp_mentions_no_data() {
        let board = Dashboard::from_datos(None);

        let html = render(&board, None);

        assert!(html.contains("Sin datos del termostato"));
        assert!(html.contains("Error API"));
    }

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape(r#""quoted""#), "&quot;quoted&quot;");
    }
}
