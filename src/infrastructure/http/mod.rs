pub mod request_id;

use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{health, story::StoryController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Any origin, method and header may call the service
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the application router with all routes and layers
pub fn build_router(config: Arc<Config>, story_controller: Arc<StoryController>) -> Router {
    let story_routes = Router::new()
        .route("/generate_story/", post(StoryController::generate_story))
        .route("/generate_story", post(StoryController::generate_story))
        .with_state(story_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(story_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    story_controller: Arc<StoryController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), story_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
