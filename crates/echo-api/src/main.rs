//! Echo chat API server: GET /, POST /messages.

use echo_api::{EchoServer, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter().into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server = EchoServer::new(config);
    if server.config().debug {
        tracing::debug!(config = ?server.config(), "debug mode enabled");
    }
    server.serve().await?;
    Ok(())
}
