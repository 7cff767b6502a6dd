use axum::{
    Router,
    routing::{get, post},
};
use client::AssetGenerator;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;

use crate::config::Settings;
use handlers::asset::prompt_to_asset;
use handlers::status::{health, root, version};

pub struct AppState {
    pub settings: Settings,
    pub generator: Arc<dyn AssetGenerator>,
}

pub fn get_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/prompt-to-asset", post(prompt_to_asset))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
