use super::document::{compose, StorybookParts};
use super::dto::StoryRequest;
use super::error::StoryServiceError;
use super::model::{MediaAsset, TextGenerationParams, ValidatedStoryRequest};
use super::prompt::{image_prompt, narration_text, story_prompt, video_prompt};
use crate::infrastructure::repositories::{
    ImageGenerationRepository, TextGenerationRepository, TtsRepository, VideoGenerationRepository,
};
use async_trait::async_trait;
use image::ImageFormat;
use std::io::Cursor;
use std::sync::Arc;
use tracing::Instrument;

/// Which speech engine narrated the story
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrator {
    Primary,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct StorybookDocument {
    pub markdown: String,
    pub narrator: Narrator,
    pub has_video: bool,
}

/// Collaborators used by the storybook pipeline
pub struct StoryCollaborators {
    pub text: Arc<dyn TextGenerationRepository>,
    pub image: Arc<dyn ImageGenerationRepository>,
    pub primary_tts: Arc<dyn TtsRepository>,
    pub fallback_tts: Arc<dyn TtsRepository>,
    /// `None` keeps the video stage switched off
    pub video: Option<Arc<dyn VideoGenerationRepository>>,
}

pub struct StoryService {
    text_repo: Arc<dyn TextGenerationRepository>,
    image_repo: Arc<dyn ImageGenerationRepository>,
    primary_tts_repo: Arc<dyn TtsRepository>,
    fallback_tts_repo: Arc<dyn TtsRepository>,
    video_repo: Option<Arc<dyn VideoGenerationRepository>>,
    text_params: TextGenerationParams,
}

impl StoryService {
    pub fn new(collaborators: StoryCollaborators, text_params: TextGenerationParams) -> Self {
        Self {
            text_repo: collaborators.text,
            image_repo: collaborators.image,
            primary_tts_repo: collaborators.primary_tts,
            fallback_tts_repo: collaborators.fallback_tts,
            video_repo: collaborators.video,
            text_params,
        }
    }

    pub fn text_model(&self) -> &str {
        &self.text_params.model
    }

    pub fn video_enabled(&self) -> bool {
        self.video_repo.is_some()
    }
}

#[async_trait]
pub trait StoryServiceApi: Send + Sync {
    /// Generate a storybook for a child profile
    ///
    /// This operation:
    /// - Validates age, reading level and theme (no collaborator is called on failure)
    /// - Generates the story text, then the illustration, then the narration
    /// - Optionally generates a short video
    /// - Composes everything into one markdown document
    async fn generate_story(
        &self,
        request: StoryRequest,
    ) -> Result<StorybookDocument, StoryServiceError>;
}

#[async_trait]
impl StoryServiceApi for StoryService {
    async fn generate_story(
        &self,
        request: StoryRequest,
    ) -> Result<StorybookDocument, StoryServiceError> {
        let span = tracing::info_span!("Generate Storybook", theme = %request.theme);

        async move {
            tracing::info!(
                age = request.age,
                reading_level = %request.reading_level,
                theme = %request.theme,
                gender = %request.gender,
                has_description = request.description.is_some(),
                "Storybook request received"
            );

            let request = ValidatedStoryRequest::try_from(request)?;

            let story_text = self.generate_story_text(&request).await?;
            let image = self.generate_image(&request.theme).await?;
            let (audio, narrator) = self.generate_audio(&story_text).await?;
            let video = self.generate_video(&story_text).await;

            let image_uri = image.to_data_uri();
            let audio_uri = audio.to_data_uri();
            let video_uri = video.as_ref().map(MediaAsset::to_data_uri);

            let markdown = compose(&StorybookParts {
                theme: &request.theme,
                image_uri: &image_uri,
                story_text: &story_text,
                audio_uri: &audio_uri,
                video_uri: video_uri.as_deref(),
            });

            tracing::info!(
                document_length = markdown.len(),
                narrator = ?narrator,
                has_video = video.is_some(),
                "Storybook composed"
            );

            Ok(StorybookDocument {
                markdown,
                narrator,
                has_video: video.is_some(),
            })
        }
        .instrument(span)
        .await
    }
}

impl StoryService {
    #[tracing::instrument(name = "Generate Story Text", skip_all)]
    async fn generate_story_text(
        &self,
        request: &ValidatedStoryRequest,
    ) -> Result<String, StoryServiceError> {
        tracing::info!(
            age = request.age,
            reading_level = %request.reading_level,
            theme = %request.theme,
            gender = %request.gender,
            description = ?request.description,
            "Start generating story"
        );

        let prompt = story_prompt(request);
        let story_text = self
            .text_repo
            .generate(&prompt, &self.text_params)
            .await
            .map_err(StoryServiceError::Dependency)?
            .into_text();

        tracing::info!(story_length = story_text.len(), "Finished generating story");
        Ok(story_text)
    }

    #[tracing::instrument(name = "Generate Image", skip(self))]
    async fn generate_image(&self, theme: &str) -> Result<MediaAsset, StoryServiceError> {
        tracing::info!("Start generating image");

        let raw = self
            .image_repo
            .generate(&image_prompt(theme))
            .await
            .map_err(StoryServiceError::Dependency)?;

        // Decoding a full-size raster is CPU bound
        let png = tokio::task::spawn_blocking(move || encode_png(&raw))
            .await
            .map_err(|e| StoryServiceError::Other(anyhow::anyhow!("PNG encoder panicked: {}", e)))?
            .map_err(StoryServiceError::Dependency)?;

        tracing::info!(png_size_bytes = png.len(), "Finished generating image");
        Ok(MediaAsset::png(png))
    }

    #[tracing::instrument(name = "Generate Audio", skip_all)]
    async fn generate_audio(
        &self,
        story_text: &str,
    ) -> Result<(MediaAsset, Narrator), StoryServiceError> {
        let narration = narration_text(story_text);
        tracing::info!(narration_length = narration.len(), "Start generating audio");

        let primary_error = match self.primary_tts_repo.synthesize(&narration).await {
            Ok(audio) if !audio.is_empty() => {
                tracing::info!(audio_size_bytes = audio.len(), "Finished generating audio");
                return Ok((MediaAsset::wav(audio), Narrator::Primary));
            }
            Ok(_) => "empty audio payload".to_string(),
            Err(e) => e,
        };

        tracing::warn!(
            error = %primary_error,
            "Primary speech synthesis failed, falling back"
        );

        let audio = self
            .fallback_tts_repo
            .synthesize(&narration)
            .await
            .map_err(|fallback_error| {
                StoryServiceError::Dependency(format!(
                    "speech synthesis failed (primary: {}; fallback: {})",
                    primary_error, fallback_error
                ))
            })?;

        tracing::info!(
            audio_size_bytes = audio.len(),
            "Finished generating audio with fallback narrator"
        );
        Ok((MediaAsset::mp3(audio), Narrator::Fallback))
    }

    /// Never fails the request: any problem degrades to "no video"
    #[tracing::instrument(name = "Generate Video", skip_all)]
    async fn generate_video(&self, story_text: &str) -> Option<MediaAsset> {
        let video_repo = self.video_repo.as_ref()?;

        match video_repo.generate(&video_prompt(story_text)).await {
            Ok(video) if !video.is_empty() => {
                tracing::info!(video_size_bytes = video.len(), "Finished generating video");
                Some(MediaAsset::mp4(video))
            }
            Ok(_) => {
                tracing::warn!("Video generation returned no data");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Video generation failed");
                None
            }
        }
    }
}

/// Re-encode any raster the `image` crate understands as PNG
fn encode_png(raw: &[u8]) -> Result<Vec<u8>, String> {
    let image = image::load_from_memory(raw)
        .map_err(|e| format!("Image model returned undecodable data: {}", e))?;

    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| format!("Failed to encode PNG: {}", e))?;

    Ok(buffer.into_inner())
}
