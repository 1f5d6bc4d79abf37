use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use booking_gateway::config::AppConfig;
use booking_gateway::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(crm_base_url = %config.crm_base_url, "using CRM");

    let state = Arc::new(AppState::from_config(&config));
    let app = booking_gateway::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
