use super::generation_repository::VideoGenerationRepository;
use crate::infrastructure::huggingface::HuggingFaceInferenceClient;
use async_trait::async_trait;
use std::sync::Arc;

/// HuggingFace text-to-video implementation
pub struct HuggingFaceVideoRepository {
    client: Arc<HuggingFaceInferenceClient>,
    model: String,
}

impl HuggingFaceVideoRepository {
    pub fn new(client: Arc<HuggingFaceInferenceClient>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl VideoGenerationRepository for HuggingFaceVideoRepository {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, String> {
        let video_bytes = self.client.infer_bytes(&self.model, prompt).await?;

        tracing::debug!(
            model = %self.model,
            video_size_bytes = video_bytes.len(),
            "HuggingFace video received"
        );

        Ok(video_bytes)
    }
}
