//! CareIntake Engine server binary

use anyhow::{Context, Result};
use intake_server::{create_app, server::ServerConfig, IntakeServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,intake_server=debug")),
        )
        .init();

    let config = ServerConfig::from_env();
    let bind_address = format!("{}:{}", config.host, config.port);

    let server = IntakeServer::new(config).context("failed to initialize server")?;
    let app = create_app(server);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;

    info!(address = %bind_address, "CareIntake Engine listening");

    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
