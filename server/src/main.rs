use client::{DefaultQueueEventHandler, FalClient};
use server::{AppState, config::Settings, get_app};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    info!("Initializing prompt-to-asset server");

    let settings = Settings::load()?;
    let (host, port) = (settings.host.clone(), settings.port);

    let generator = Arc::new(FalClient::new(
        settings.client_config(),
        Arc::new(DefaultQueueEventHandler),
    ));
    let state = Arc::new(AppState {
        settings,
        generator,
    });

    let app = get_app(state);

    info!("Routes configured, binding to {}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    info!("Server started successfully, listening for requests");

    axum::serve(listener, app).await?;

    Ok(())
}
