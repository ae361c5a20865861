use std::env;

pub const DEFAULT_HF_INFERENCE_BASE_URL: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_HF_CHAT_BASE_URL: &str = "https://router.huggingface.co/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // HuggingFace inference
    pub hf_token: String,
    pub hf_inference_base_url: String,
    pub hf_chat_base_url: String,
    pub inference_timeout_secs: Option<u64>,
    // Models
    pub text_model: String,
    pub text_max_new_tokens: u32,
    pub text_temperature: f32,
    pub image_model: String,
    pub speech_model: String,
    pub fallback_tts_language: String,
    // Optional video stage
    pub video_generation_enabled: bool,
    pub video_model: String,
    // Answer validation failures with 200 + warning document
    pub soft_validation_errors: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HF_TOKEN not found in environment or .env")]
    MissingToken,
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());
        let flag = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_lowercase() == "true")
                .unwrap_or(false)
        };

        let hf_token = lookup("HF_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let config = Config {
            host: var("HOST", "0.0.0.0"),
            port: parse_value("PORT", &var("PORT", "8000"))?,
            environment: match var("ENVIRONMENT", "development").as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match var("LOG_FORMAT", "pretty").as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            hf_token,
            hf_inference_base_url: var("HF_INFERENCE_BASE_URL", DEFAULT_HF_INFERENCE_BASE_URL),
            hf_chat_base_url: var("HF_CHAT_BASE_URL", DEFAULT_HF_CHAT_BASE_URL),
            inference_timeout_secs: match lookup("INFERENCE_TIMEOUT_SECS") {
                Some(raw) => Some(parse_value("INFERENCE_TIMEOUT_SECS", &raw)?),
                None => None,
            },
            text_model: var("TEXT_MODEL", "Qwen/Qwen2.5-7B-Instruct"),
            text_max_new_tokens: parse_value("TEXT_MAX_NEW_TOKENS", &var("TEXT_MAX_NEW_TOKENS", "500"))?,
            text_temperature: parse_value("TEXT_TEMPERATURE", &var("TEXT_TEMPERATURE", "0.65"))?,
            image_model: var("IMAGE_MODEL", "stabilityai/stable-diffusion-xl-base-1.0"),
            speech_model: var("SPEECH_MODEL", "espnet/kan-bayashi_ljspeech_vits"),
            fallback_tts_language: var("FALLBACK_TTS_LANGUAGE", "en"),
            video_generation_enabled: flag("VIDEO_GENERATION_ENABLED"),
            video_model: var("VIDEO_MODEL", "cerspense/zeroscope_v2_576w"),
            soft_validation_errors: flag("SOFT_VALIDATION_ERRORS"),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse_value<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
