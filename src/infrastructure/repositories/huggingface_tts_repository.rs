use super::tts_repository::TtsRepository;
use crate::infrastructure::huggingface::HuggingFaceInferenceClient;
use async_trait::async_trait;
use std::sync::Arc;

/// HuggingFace text-to-speech implementation, produces WAV audio
pub struct HuggingFaceTtsRepository {
    client: Arc<HuggingFaceInferenceClient>,
    model: String,
}

impl HuggingFaceTtsRepository {
    pub fn new(client: Arc<HuggingFaceInferenceClient>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl TtsRepository for HuggingFaceTtsRepository {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            text_length = text.len(),
            text_preview = %text.chars().take(200).collect::<String>(),
            "Calling HuggingFace text-to-speech"
        );

        let audio_data = self.client.infer_bytes(&self.model, text).await?;

        tracing::info!(
            provider = "huggingface",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
