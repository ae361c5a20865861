use super::tts_repository::TtsRepository;
use async_trait::async_trait;
use std::time::Duration;

const GOOGLE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// Google Translate TTS rejects requests longer than 100 characters
const MAX_BATCH_SIZE: usize = 100;

/// Google Translate TTS implementation, produces MP3 audio.
/// Used as the fallback narrator.
pub struct GoogleTtsRepository {
    base_url: String,
    language: String,
    http_client: reqwest::Client,
}

impl GoogleTtsRepository {
    pub fn new(language: String, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        Self::with_base_url(GOOGLE_TTS_URL.to_string(), language, timeout)
    }

    pub fn with_base_url(
        base_url: String,
        language: String,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            language,
            http_client: builder.build()?,
        })
    }

    /// Split text into batches on word boundaries.
    /// Each batch is at most MAX_BATCH_SIZE characters
    fn split_into_batches(text: &str) -> Vec<String> {
        let mut batches = Vec::new();
        let mut current_batch = String::new();
        let mut current_len = 0;

        for word in text.split_whitespace() {
            let word_len = word.chars().count();

            // Words that cannot fit in a batch on their own are split by characters
            if word_len > MAX_BATCH_SIZE {
                if !current_batch.is_empty() {
                    batches.push(std::mem::take(&mut current_batch));
                    current_len = 0;
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(MAX_BATCH_SIZE) {
                    batches.push(chunk.iter().collect());
                }
                continue;
            }

            let separator = usize::from(!current_batch.is_empty());
            if current_len + separator + word_len > MAX_BATCH_SIZE {
                batches.push(std::mem::take(&mut current_batch));
                current_len = 0;
            }

            if !current_batch.is_empty() {
                current_batch.push(' ');
                current_len += 1;
            }
            current_batch.push_str(word);
            current_len += word_len;
        }

        if !current_batch.is_empty() {
            batches.push(current_batch);
        }

        batches
    }

    fn batch_url(&self, batch: &str, index: usize, total: usize) -> String {
        format!(
            "{}?ie=UTF-8&q={}&tl={}&client=tw-ob&total={}&idx={}&textlen={}",
            self.base_url,
            urlencoding::encode(batch),
            urlencoding::encode(&self.language),
            total,
            index,
            batch.chars().count()
        )
    }

    /// Fetch a single batch as MP3
    async fn call_google(&self, batch: &str, index: usize, total: usize) -> Result<Vec<u8>, String> {
        let response = self
            .http_client
            .get(self.batch_url(batch, index, total))
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await
            .map_err(|e| format!("Google TTS request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!(
                "Google TTS returned {} for batch {}",
                response.status().as_u16(),
                index
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read Google TTS audio: {}", e))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = Self::split_into_batches(text);
        if batches.is_empty() {
            return Err("No text to speak".to_string());
        }

        tracing::info!(
            language = %self.language,
            batch_count = batches.len(),
            text_length = text.len(),
            "Starting Google TTS synthesis"
        );

        // MP3 frames can be concatenated as-is
        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self.call_google(batch, index, batches.len()).await?;
            merged_audio.extend(audio_data);
        }

        tracing::info!(
            provider = "google_translate",
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}
