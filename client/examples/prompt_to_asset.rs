use anyhow::Result;
use client::{AssetGenerator, DefaultQueueEventHandler, FalClient, config::ClientConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let prompt = std::env::args().nth(1).unwrap_or_else(|| "A tree".to_string());

    let client = FalClient::new(
        ClientConfig {
            api_key: std::env::var("FAL_KEY").ok(),
            ..Default::default()
        },
        Arc::new(DefaultQueueEventHandler),
    );

    println!("Submitting {prompt:?} to {}...", client.config().application);

    let result = client.prompt_to_asset(&prompt.into()).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
