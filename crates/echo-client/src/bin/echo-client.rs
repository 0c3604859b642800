//! Sends one message to a running echo API and prints the reply.

use echo_client::EchoClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_MESSAGE: &str = "Hello! This is my first chatbot message.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let message = if args.is_empty() {
        DEFAULT_MESSAGE.to_string()
    } else {
        args.join(" ")
    };

    let client = EchoClient::from_env();
    client.health().await?;
    let reply = client.send(&message).await?;
    println!("Reply: {}", reply);
    Ok(())
}
