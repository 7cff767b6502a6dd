//! Payloads returned by the fal queue API.
//!
//! A job is submitted once, its status is polled until `COMPLETED`, and the
//! result is then fetched from `response_url`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SubmitResponse {
    pub request_id: String,
    pub response_url: String,
    pub status_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct QueueLog {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueStatus {
    InQueue {
        #[serde(default)]
        queue_position: Option<u64>,
    },
    InProgress {
        #[serde(default)]
        logs: Option<Vec<QueueLog>>,
    },
    Completed {
        #[serde(default)]
        logs: Option<Vec<QueueLog>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<Value>,
    },
}

impl QueueStatus {
    /// Logs reported so far. The queue returns the full log on every poll.
    pub fn logs(&self) -> &[QueueLog] {
        match self {
            QueueStatus::InQueue { .. } => &[],
            QueueStatus::InProgress { logs } | QueueStatus::Completed { logs, .. } => {
                logs.as_deref().unwrap_or_default()
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, QueueStatus::Completed { .. })
    }
}
