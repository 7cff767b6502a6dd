use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments of the `flux-to-asset` workflow. The field names are the node
/// inputs exposed by the remote pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FluxToAssetArguments {
    #[serde(rename = "df_string_replace_Replace_With")]
    pub prompt: Value,
    #[serde(rename = "ksampler_seed")]
    pub seed: u32,
}

impl FluxToAssetArguments {
    pub fn new(prompt: Value, seed: u32) -> Self {
        Self { prompt, seed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_pipeline_field_names() {
        let arguments = FluxToAssetArguments::new(json!("A tree"), u32::MAX);
        assert_eq!(
            serde_json::to_value(&arguments).unwrap(),
            json!({
                "df_string_replace_Replace_With": "A tree",
                "ksampler_seed": 4294967295u32,
            })
        );
    }
}
