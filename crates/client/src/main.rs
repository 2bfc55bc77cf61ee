//! Animal handbook client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. Logging to stderr and a daily rolling file
//! 3. Content, stores and runtime via [`Client::start`]
//!
//! # Examples
//!
//! ```bash
//! HANDBOOK_SAVE_DIR=/tmp/handbook RUST_LOG=debug cargo run -p handbook-client
//! ```

use anyhow::Result;
use handbook_client::{Client, ClientConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging()?;

    tracing::info!("Starting animal handbook client");
    tracing::info!("Content: {}", config.data_dir.display());
    tracing::info!("Save data: {}", config.save_dir.display());
    tracing::info!("Premium: {}", config.runtime.has_premium);

    let client = Client::start(&config).await?;
    client.report().await?;
    client.shutdown().await
}
