//! Termoweb - Web dashboard for a remote thermostat backend
//!
//! Polls the backend REST API, keeps the last good state snapshot in memory
//! and serves a server-rendered dashboard plus JSON endpoints.

use std::sync::Arc;

use clap::Parser;

use termoweb::cache::MemoryCache;
use termoweb::client::HttpApiClient;
use termoweb::config::Settings;
use termoweb::service::TermostatoService;
use termoweb::web::{build_router, AppState};

/// Termoweb - thermostat dashboard web service
#[derive(Parser, Debug)]
#[command(name = "termoweb")]
#[command(about = "Web dashboard for the thermostat backend")]
#[command(version)]
struct Cli {
    /// Address to bind the HTTP server on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5001)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,termoweb=debug".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    tracing::info!("backend API at {}", settings.api_url);

    let api_client = Arc::new(HttpApiClient::with_timeout(
        settings.api_url.clone(),
        settings.api_timeout,
    ));
    let cache = Arc::new(MemoryCache::new());
    let service = Arc::new(TermostatoService::new(api_client, cache));

    let state = AppState {
        service,
        api_url: settings.api_url,
    };
    let app = build_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("termoweb listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
