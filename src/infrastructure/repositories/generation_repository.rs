use crate::domain::story::{GeneratedText, TextGenerationParams};
use async_trait::async_trait;

/// Repository for story text generation.
/// Abstracts the underlying language model provider.
#[async_trait]
pub trait TextGenerationRepository: Send + Sync {
    /// Generate text for a prompt with the given sampling settings
    ///
    /// # Errors
    /// Returns error if the provider is unavailable or returns no content
    async fn generate(
        &self,
        prompt: &str,
        params: &TextGenerationParams,
    ) -> Result<GeneratedText, String>;
}

/// Repository for illustration generation.
#[async_trait]
pub trait ImageGenerationRepository: Send + Sync {
    /// Generate a raster image for a prompt
    ///
    /// Returns the encoded image as produced by the provider (PNG, JPEG, ...)
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, String>;
}

/// Repository for short animated clips.
#[async_trait]
pub trait VideoGenerationRepository: Send + Sync {
    /// Generate an MP4 clip for a prompt
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, String>;
}
