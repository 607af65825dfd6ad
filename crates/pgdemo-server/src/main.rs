use std::sync::Arc;

use anyhow::{Context, Result};
use pgdemo_config::DbConfig;
use pgdemo_server::{router, ServerState, ADDR};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let db = DbConfig::load().context("invalid database configuration")?;
    info!("Database target: {}", db.target());

    let app = router(Arc::new(ServerState { db }));

    info!("Starting server on {}", ADDR);

    let listener = tokio::net::TcpListener::bind(ADDR).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
