use std::time::Duration;

pub const DEFAULT_QUEUE_URL: &str = "https://queue.fal.run";
pub const DEFAULT_APPLICATION: &str = "comfy/devniel/flux-to-asset";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub struct ClientConfig {
    pub api_key: Option<String>,
    pub application: String,
    pub poll_interval: Duration,
    pub queue_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            application: DEFAULT_APPLICATION.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            queue_url: DEFAULT_QUEUE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn submit_url(&self) -> String {
        format!(
            "{}/{}",
            self.queue_url.trim_end_matches('/'),
            self.application.trim_start_matches('/')
        )
    }
}
