use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use request::PromptToAssetRequest;
use response::ResultEnvelope;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::AppState;
use crate::error::AppError;

pub async fn prompt_to_asset(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // An unreadable body carries no prompt either
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Rejected prompt-to-asset body: {}", rejection.body_text());
            Value::Null
        }
    };

    let request = PromptToAssetRequest::try_from(&body)?;
    info!("Received prompt-to-asset request, prompt: {}", request.prompt);

    let result = state.generator.prompt_to_asset(&request.prompt).await?;

    Ok((StatusCode::OK, Json(ResultEnvelope::from(result))))
}
