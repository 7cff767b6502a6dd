use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod queue;

pub use queue::{QueueLog, QueueStatus, SubmitResponse};

pub const GREETING: &str = "Hello, AI!";
pub const HEALTHY: &str = "healthy";
pub const VERSION: &str = "0.1.0";

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct VersionResponse {
    pub version: String,
}

/// Successful generation, the remote value is carried unmodified.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ResultEnvelope {
    pub result: Value,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl MessageResponse {
    pub fn greeting() -> Self {
        Self {
            message: GREETING.to_string(),
        }
    }
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY.to_string(),
        }
    }
}

impl VersionResponse {
    pub fn current() -> Self {
        Self {
            version: VERSION.to_string(),
        }
    }
}

impl From<Value> for ResultEnvelope {
    fn from(result: Value) -> Self {
        Self { result }
    }
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
