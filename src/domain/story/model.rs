use super::dto::StoryRequest;
use super::error::StoryServiceError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 15;

pub const AGE_WARNING: &str = "⚠️ Age must be between 0 and 15.";
pub const READING_LEVEL_WARNING: &str =
    "⚠️ Reading level must be one of Beginner, Intermediate, Advanced.";
pub const THEME_WARNING: &str = "⚠️ Theme must be provided.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ReadingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::Beginner => "Beginner",
            ReadingLevel::Intermediate => "Intermediate",
            ReadingLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReadingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(ReadingLevel::Beginner),
            "Intermediate" => Ok(ReadingLevel::Intermediate),
            "Advanced" => Ok(ReadingLevel::Advanced),
            other => Err(format!("unknown reading level: {}", other)),
        }
    }
}

/// A story request whose fields passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedStoryRequest {
    pub age: u8,
    pub reading_level: ReadingLevel,
    pub theme: String,
    pub gender: String,
    pub description: Option<String>,
}

impl TryFrom<StoryRequest> for ValidatedStoryRequest {
    type Error = StoryServiceError;

    /// Checks age, then reading level, then theme; the first failure wins.
    fn try_from(req: StoryRequest) -> Result<Self, Self::Error> {
        if !(MIN_AGE..=MAX_AGE).contains(&req.age) {
            return Err(StoryServiceError::Validation(AGE_WARNING.to_string()));
        }

        let reading_level = req
            .reading_level
            .parse::<ReadingLevel>()
            .map_err(|_| StoryServiceError::Validation(READING_LEVEL_WARNING.to_string()))?;

        if req.theme.is_empty() {
            return Err(StoryServiceError::Validation(THEME_WARNING.to_string()));
        }

        Ok(Self {
            age: req.age as u8,
            reading_level,
            theme: req.theme,
            gender: req.gender,
            description: req.description.filter(|d| !d.trim().is_empty()),
        })
    }
}

/// Sampling settings forwarded to the text collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct TextGenerationParams {
    pub model: String,
    pub max_new_tokens: u32,
    pub temperature: f32,
}

/// Output of the text collaborator: a chat message or a bare string
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedText {
    /// Chat-completion reply, as served by the OpenAI-compatible router
    Message { content: String },
    /// Bare completion string, as served by text-generation inference endpoints
    Plain(String),
}

impl GeneratedText {
    pub fn into_text(self) -> String {
        match self {
            GeneratedText::Message { content } => content,
            GeneratedText::Plain(text) => text,
        }
    }
}

/// Binary output of a generation step together with its media type
#[derive(Debug, Clone, PartialEq)]
pub struct MediaAsset {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl MediaAsset {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            mime_type: "image/png",
            bytes,
        }
    }

    pub fn wav(bytes: Vec<u8>) -> Self {
        Self {
            mime_type: "audio/wav",
            bytes,
        }
    }

    pub fn mp3(bytes: Vec<u8>) -> Self {
        Self {
            mime_type: "audio/mp3",
            bytes,
        }
    }

    pub fn mp4(bytes: Vec<u8>) -> Self {
        Self {
            mime_type: "video/mp4",
            bytes,
        }
    }

    /// Inline `data:` reference carrying the media type and base64 payload
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}
