//! Template example service binary.

use anyhow::{Context, Result};
use docbundle_service::{Service, ServiceConfig};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::new("info,tower_http=debug"))
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env().context("Failed to load configuration")?;

    Service::new(config).start().await?;

    Ok(())
}
