use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct InferenceInputs<'a> {
    inputs: &'a str,
}

/// Thin client for the HuggingFace serverless inference endpoints that take
/// `{"inputs": ...}` and answer with raw media bytes (images, audio, video).
pub struct HuggingFaceInferenceClient {
    base_url: String,
    token: String,
    http_client: reqwest::Client,
}

impl HuggingFaceInferenceClient {
    pub fn new(
        base_url: String,
        token: String,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http_client: builder.build()?,
        })
    }

    pub fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    /// POST `inputs` to the model and return the response body as bytes
    pub async fn infer_bytes(&self, model: &str, inputs: &str) -> Result<Vec<u8>, String> {
        let url = self.model_url(model);
        tracing::debug!(url = %url, inputs_length = inputs.len(), "Sending HuggingFace inference request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&InferenceInputs { inputs })
            .send()
            .await
            .map_err(|e| format!("HuggingFace request to {} failed: {}", model, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!(
                "HuggingFace {} returned {}: {}",
                model,
                status.as_u16(),
                error_text
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read HuggingFace {} response: {}", model, e))?;

        Ok(bytes.to_vec())
    }
}
