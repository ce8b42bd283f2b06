use std::sync::Arc;

use anyhow::Context;
use clarybot_relay::{
    config::Config, routes, services::openai::OpenAiClient, state::AppState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    let provider = OpenAiClient::from_config(&config).context("building completion client")?;
    let state = Arc::new(AppState::new(Arc::new(provider)));

    let app = routes::create_router(&config.static_dir).with_state(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, model = %config.model, "ClaryBot relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
