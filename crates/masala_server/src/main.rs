//! masala server binary.
//!
//! Usage:
//!   GROQ_API_KEY=... cargo run --bin masala_server

use masala_models::GroqClient;
use masala_server::{ServerConfig, create_router};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = GroqClient::from_env()?;
    let config = ServerConfig::from_env()?;

    let app = create_router(Arc::new(client));

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(bind = %config.bind, "masala server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
