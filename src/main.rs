use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use storybook_backend::controllers::story::StoryController;
use storybook_backend::domain::story::{StoryCollaborators, StoryService, TextGenerationParams};
use storybook_backend::infrastructure::config::{Config, LogFormat};
use storybook_backend::infrastructure::http::start_http_server;
use storybook_backend::infrastructure::huggingface::HuggingFaceInferenceClient;
use storybook_backend::infrastructure::repositories::{
    GoogleTtsRepository, HuggingFaceImageRepository, HuggingFaceTextRepository,
    HuggingFaceTtsRepository, HuggingFaceVideoRepository, VideoGenerationRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; a missing HF_TOKEN stops us before serving
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting Storybook Backend on {}:{}",
        config.host,
        config.port
    );

    let timeout = config.inference_timeout_secs.map(Duration::from_secs);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate inference clients
    tracing::info!(
        inference_base_url = %config.hf_inference_base_url,
        chat_base_url = %config.hf_chat_base_url,
        "Initializing HuggingFace clients"
    );
    let inference_client = Arc::new(HuggingFaceInferenceClient::new(
        config.hf_inference_base_url.clone(),
        config.hf_token.clone(),
        timeout,
    )?);
    let chat_client = Arc::new(HuggingFaceTextRepository::client_for(
        &config.hf_chat_base_url,
        &config.hf_token,
    ));

    // 2. Instantiate repositories (inject clients)
    tracing::info!("Instantiating repositories...");
    let text_repo = Arc::new(HuggingFaceTextRepository::new(chat_client));
    let image_repo = Arc::new(HuggingFaceImageRepository::new(
        inference_client.clone(),
        config.image_model.clone(),
    ));
    let primary_tts_repo = Arc::new(HuggingFaceTtsRepository::new(
        inference_client.clone(),
        config.speech_model.clone(),
    ));
    let fallback_tts_repo = Arc::new(GoogleTtsRepository::new(
        config.fallback_tts_language.clone(),
        timeout,
    )?);
    let video_repo: Option<Arc<dyn VideoGenerationRepository>> = if config.video_generation_enabled {
        tracing::info!(model = %config.video_model, "Video generation enabled");
        Some(Arc::new(HuggingFaceVideoRepository::new(
            inference_client.clone(),
            config.video_model.clone(),
        )))
    } else {
        None
    };

    // 3. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let story_service = Arc::new(StoryService::new(
        StoryCollaborators {
            text: text_repo,
            image: image_repo,
            primary_tts: primary_tts_repo,
            fallback_tts: fallback_tts_repo,
            video: video_repo,
        },
        TextGenerationParams {
            model: config.text_model.clone(),
            max_new_tokens: config.text_max_new_tokens,
            temperature: config.text_temperature,
        },
    ));

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let story_controller = Arc::new(StoryController::new(
        story_service,
        config.soft_validation_errors,
    ));

    let config = Arc::new(config);

    start_http_server(config, story_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "storybook_backend=debug,tower_http=debug"
    } else {
        "storybook_backend=info,tower_http=info"
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
