use axum::{Json, http::StatusCode, response::IntoResponse};
use request::MissingPrompt;
use response::ErrorEnvelope;
use tracing::error;

pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Only a missing prompt is the caller's fault, anything else came from the remote call
        let status_code = if self.0.downcast_ref::<MissingPrompt>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            error!("Asset generation failed: {:#}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status_code, Json(ErrorEnvelope::new(self.0.to_string()))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
