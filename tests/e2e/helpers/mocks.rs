use async_trait::async_trait;
use image::{ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use storybook_backend::domain::story::{GeneratedText, TextGenerationParams};
use storybook_backend::infrastructure::repositories::{
    ImageGenerationRepository, TextGenerationRepository, TtsRepository, VideoGenerationRepository,
};

pub const MOCK_STORY: &str =
    "## Chapter 1: Lift-off!\n\nMaya climbed into her cardboard rocket, counted to 3, and zoomed past the stars.";

/// Minimal JPEG, so the pipeline has to re-encode it as PNG
pub fn mock_image_bytes() -> Vec<u8> {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(8, 8, Rgb([30, 144, 255]));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Jpeg)
        .expect("encode mock jpeg");
    buffer.into_inner()
}

pub fn mock_wav_bytes() -> Vec<u8> {
    b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec()
}

pub fn mock_mp3_bytes() -> Vec<u8> {
    // MP3 frame header followed by padding
    vec![0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00]
}

#[derive(Default)]
pub struct MockTextRepository {
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
    pub params: Mutex<Vec<TextGenerationParams>>,
    pub fail: bool,
}

impl MockTextRepository {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            ..Default::default()
        }
    }
}

#[async_trait]
impl TextGenerationRepository for MockTextRepository {
    async fn generate(
        &self,
        prompt: &str,
        params: &TextGenerationParams,
    ) -> Result<GeneratedText, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.params.lock().unwrap().push(params.clone());
        if self.fail {
            return Err("HuggingFace Qwen/Qwen2.5-7B-Instruct returned 503: Model is overloaded".to_string());
        }
        Ok(GeneratedText::Message {
            content: MOCK_STORY.to_string(),
        })
    }
}

pub struct MockImageRepository {
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
    pub fail: bool,
}

impl MockImageRepository {
    pub fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            fail,
        }
    }
}

#[async_trait]
impl ImageGenerationRepository for MockImageRepository {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err("HuggingFace stabilityai/stable-diffusion-xl-base-1.0 returned 503".to_string());
        }
        Ok(mock_image_bytes())
    }
}

pub struct MockTtsRepository {
    pub calls: AtomicUsize,
    pub texts: Mutex<Vec<String>>,
    result: Result<Vec<u8>, String>,
}

impl MockTtsRepository {
    pub fn succeeding(audio: Vec<u8>) -> Self {
        Self::with_result(Ok(audio))
    }

    pub fn failing(reason: &str) -> Self {
        Self::with_result(Err(reason.to_string()))
    }

    fn with_result(result: Result<Vec<u8>, String>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            texts: Mutex::new(Vec::new()),
            result,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsRepository for MockTtsRepository {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());
        self.result.clone()
    }
}

pub struct MockVideoRepository {
    pub calls: AtomicUsize,
    result: Result<Vec<u8>, String>,
}

impl MockVideoRepository {
    pub fn new(result: Result<Vec<u8>, String>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result,
        }
    }
}

#[async_trait]
impl VideoGenerationRepository for MockVideoRepository {
    async fn generate(&self, _prompt: &str) -> Result<Vec<u8>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
