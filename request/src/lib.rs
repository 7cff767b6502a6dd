use serde::Serialize;
use serde_json::Value;
use std::{error::Error, fmt};

pub mod arguments;

pub use arguments::FluxToAssetArguments;

pub const PROMPT_FIELD: &str = "prompt";

/// Body of `POST /prompt-to-asset`.
///
/// Only the `prompt` key is inspected. Its value is kept as raw JSON and is
/// never type checked, so any truthy value is accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptToAssetRequest {
    pub prompt: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingPrompt;

impl fmt::Display for MissingPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No prompt provided")
    }
}

impl Error for MissingPrompt {}

impl PromptToAssetRequest {
    pub fn new(prompt: impl Into<Value>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl TryFrom<&Value> for PromptToAssetRequest {
    type Error = MissingPrompt;

    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        common::truthy_field(body, PROMPT_FIELD)
            .cloned()
            .map(|prompt| Self { prompt })
            .ok_or(MissingPrompt)
    }
}

impl TryFrom<Value> for PromptToAssetRequest {
    type Error = MissingPrompt;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        Self::try_from(&body)
    }
}
