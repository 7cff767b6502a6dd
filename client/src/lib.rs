//! # Asset client
//!
//! Submits generation jobs to the fal queue API and waits for their result.
//!
//! A job goes through three HTTP calls:
//!
//! 1. `POST {queue_url}/{application}` with the workflow arguments
//! 2. `GET {status_url}?logs=1`, repeated until the job is `COMPLETED`
//! 3. `GET {response_url}` for the result
//!
//! Log lines reported while the job runs are forwarded to a
//! [`QueueEventHandler`]. Nothing is retried and no timeout is applied.
//!
//! ```no_run
//! use client::{AssetGenerator, DefaultQueueEventHandler, FalClient, config::ClientConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FalClient::new(
//!         ClientConfig {
//!             api_key: std::env::var("FAL_KEY").ok(),
//!             ..Default::default()
//!         },
//!         Arc::new(DefaultQueueEventHandler),
//!     );
//!
//!     let result = client.prompt_to_asset(&"A tree".into()).await?;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::{RequestBuilder, header::AUTHORIZATION};
use request::FluxToAssetArguments;
use response::{QueueStatus, SubmitResponse};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

pub mod config;
pub mod handler;
pub mod seed;

pub use handler::{DefaultQueueEventHandler, QueueEventHandler};
pub use seed::random_seed;

use config::ClientConfig;

/// Turns a prompt into a generated asset.
#[async_trait]
pub trait AssetGenerator: Send + Sync {
    async fn prompt_to_asset(&self, prompt: &Value) -> Result<Value>;
}

pub struct FalClient {
    config: ClientConfig,
    handler: Arc<dyn QueueEventHandler>,
    http: reqwest::Client,
}

impl FalClient {
    pub fn new(config: ClientConfig, handler: Arc<dyn QueueEventHandler>) -> Self {
        Self {
            config,
            handler,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a job and block until its result is available.
    pub async fn subscribe(&self, arguments: &FluxToAssetArguments) -> Result<Value> {
        let submitted = self.submit(arguments).await?;
        info!(
            "Submitted request {} to {}",
            submitted.request_id, self.config.application
        );

        self.wait_for_completion(&submitted).await?;
        self.fetch_result(&submitted).await
    }

    async fn submit(&self, arguments: &FluxToAssetArguments) -> Result<SubmitResponse> {
        let url = self.config.submit_url();
        let response = self
            .authorize(self.http.post(&url))
            .json(arguments)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    async fn status(&self, submitted: &SubmitResponse) -> Result<QueueStatus> {
        let response = self
            .authorize(self.http.get(&submitted.status_url))
            .query(&[("logs", "1")])
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    async fn wait_for_completion(&self, submitted: &SubmitResponse) -> Result<()> {
        let request_id = submitted.request_id.as_str();
        let mut forwarded_logs = 0;

        loop {
            let status = self.status(submitted).await?;
            debug!("Request {request_id} status: {status:?}");

            // The queue reports the whole log on every poll.
            let logs = status.logs();
            for log in logs.iter().skip(forwarded_logs) {
                self.handler.on_log(&log.message)?;
            }
            forwarded_logs = forwarded_logs.max(logs.len());

            match status {
                QueueStatus::InQueue { queue_position } => {
                    self.handler.on_queued(request_id, queue_position)?;
                }
                QueueStatus::InProgress { .. } => {}
                QueueStatus::Completed { error, .. } => {
                    if let Some(error) = error.filter(|e| !e.is_null()) {
                        let message = match error {
                            Value::String(s) => s,
                            other => other.to_string(),
                        };
                        error!("Request {request_id} failed: {message}");
                        bail!(message);
                    }

                    self.handler.on_completed(request_id)?;
                    return Ok(());
                }
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    async fn fetch_result(&self, submitted: &SubmitResponse) -> Result<Value> {
        let response = self
            .authorize(self.http.get(&submitted.response_url))
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => builder.header(AUTHORIZATION, format!("Key {key}")),
            None => builder,
        }
    }
}

#[async_trait]
impl AssetGenerator for FalClient {
    async fn prompt_to_asset(&self, prompt: &Value) -> Result<Value> {
        let seed = random_seed();
        info!(
            "Generating asset with {} using seed {}",
            self.config.application, seed
        );

        self.subscribe(&FluxToAssetArguments::new(prompt.clone(), seed))
            .await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    bail!("Request failed with status: {status}: {body}")
}
