use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Reports the configured collaborators
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let video = if config.video_generation_enabled {
        "enabled"
    } else {
        "disabled"
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "text_model": config.text_model,
            "image_model": config.image_model,
            "speech_model": config.speech_model,
            "video": video,
        })),
    )
}
