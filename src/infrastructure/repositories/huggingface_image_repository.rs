use super::generation_repository::ImageGenerationRepository;
use crate::infrastructure::huggingface::HuggingFaceInferenceClient;
use async_trait::async_trait;
use std::sync::Arc;

/// HuggingFace text-to-image implementation
pub struct HuggingFaceImageRepository {
    client: Arc<HuggingFaceInferenceClient>,
    model: String,
}

impl HuggingFaceImageRepository {
    pub fn new(client: Arc<HuggingFaceInferenceClient>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl ImageGenerationRepository for HuggingFaceImageRepository {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let image_bytes = self.client.infer_bytes(&self.model, prompt).await?;

        tracing::info!(
            provider = "huggingface",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            image_size_bytes = image_bytes.len(),
            "Image generation completed"
        );

        Ok(image_bytes)
    }
}
