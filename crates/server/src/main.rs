use std::sync::Arc;

use anyhow::Context;
use club_site::clients::lichess::LichessClient;
use club_site::config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    let lichess = LichessClient::new(&config.lichess_api_url, config.http_timeout)
        .context("Failed to build Lichess client")?;
    tracing::info!(
        "Following broadcast {} via {} every {:?}",
        config.tournament_id,
        config.lichess_api_url,
        config.poll_interval
    );

    let addr = format!("{}:{}", config.host, config.port);
    let app = club_site::app(config, Arc::new(lichess));

    tracing::info!("Starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
