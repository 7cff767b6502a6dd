use axum::Json;
use response::{HealthResponse, MessageResponse, VersionResponse};

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::greeting())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse::current())
}
