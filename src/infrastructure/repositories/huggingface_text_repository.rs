use super::generation_repository::TextGenerationRepository;
use crate::domain::story::{GeneratedText, TextGenerationParams};
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Story text generation through the HuggingFace router's
/// OpenAI-compatible chat completions API
pub struct HuggingFaceTextRepository {
    client: Arc<Client<OpenAIConfig>>,
}

impl HuggingFaceTextRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>) -> Self {
        Self { client }
    }

    /// Build a chat client pointed at the HuggingFace router
    pub fn client_for(api_base: &str, token: &str) -> Client<OpenAIConfig> {
        let config = OpenAIConfig::new()
            .with_api_base(api_base)
            .with_api_key(token);
        Client::with_config(config)
    }
}

#[async_trait]
impl TextGenerationRepository for HuggingFaceTextRepository {
    async fn generate(
        &self,
        prompt: &str,
        params: &TextGenerationParams,
    ) -> Result<GeneratedText, String> {
        let start_time = std::time::Instant::now();

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| format!("Failed to build chat message: {}", e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(params.model.as_str())
            .max_tokens(params.max_new_tokens)
            .temperature(params.temperature)
            .messages([message.into()])
            .build()
            .map_err(|e| format!("Failed to build chat request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %params.model,
                prompt_length = prompt.len(),
                "HuggingFace chat completion failed"
            );
            format!("HuggingFace text generation error: {}", e)
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| format!("{} returned no completion content", params.model))?;

        tracing::info!(
            provider = "huggingface",
            model = %params.model,
            latency_ms = start_time.elapsed().as_millis(),
            story_length = content.len(),
            "Text generation completed"
        );

        Ok(GeneratedText::Message { content })
    }
}
