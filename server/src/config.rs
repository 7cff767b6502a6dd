use client::config::{ClientConfig, DEFAULT_APPLICATION, DEFAULT_QUEUE_URL};
use config::{Config, File, Source};
use serde::Deserialize;
use std::{env, time::Duration};
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_PORT_BACKEND: u16 = 3001;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Process-wide settings, read once at startup.
///
/// Credentials come from `OPENAI_API_KEY` and `FAL_KEY` and are not checked
/// here: a bad or missing key only shows up when the first job is submitted.
/// `PORT_BACKEND` is kept for the other services of the project and does
/// not affect the listening address, which only the optional config file can
/// change.
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub port_backend: u16,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub fal_key: Option<String>,
    pub fal_queue_url: String,
    pub fal_application: String,
    pub poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            port_backend: DEFAULT_PORT_BACKEND,
            openai_api_key: None,
            fal_key: None,
            fal_queue_url: DEFAULT_QUEUE_URL.to_string(),
            fal_application: DEFAULT_APPLICATION.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Load `.env`, then the optional `config` file, then the environment.
    pub fn load() -> anyhow::Result<Self> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            warn!("Failed to read .env file: {e}");
        }

        let settings = Self::from_sources(File::with_name(CONFIG_FILE).required(false), |key| {
            env::var(key).ok()
        })?;

        info!(
            "Settings loaded - port_backend: {}, fal_application: {}, fal_key set: {}, openai_api_key set: {}",
            settings.port_backend,
            settings.fal_application,
            settings.fal_key.is_some(),
            settings.openai_api_key.is_some()
        );

        Ok(settings)
    }

    pub fn from_sources<S, F>(file: S, env: F) -> anyhow::Result<Self>
    where
        S: Source + Send + Sync + 'static,
        F: Fn(&str) -> Option<String>,
    {
        let settings = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("port_backend", i64::from(DEFAULT_PORT_BACKEND))?
            .set_default("fal_queue_url", DEFAULT_QUEUE_URL)?
            .set_default("fal_application", DEFAULT_APPLICATION)?
            .set_default("poll_interval_ms", DEFAULT_POLL_INTERVAL_MS as i64)?
            .add_source(file)
            .set_override_option("openai_api_key", env("OPENAI_API_KEY"))?
            .set_override_option("fal_key", env("FAL_KEY"))?
            .set_override_option("port_backend", env("PORT_BACKEND"))?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.fal_key.clone(),
            application: self.fal_application.clone(),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            queue_url: self.fal_queue_url.clone(),
        }
    }
}
