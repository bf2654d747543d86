use anyhow::Result;
use nws_forecast_gateway::{Application, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nws_forecast_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting forecast gateway");

    let config = ServerConfig::from_env()?;
    tracing::info!("Forwarding lookups to {}", config.upstream_base_url);

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
