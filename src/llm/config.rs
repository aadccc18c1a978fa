use std::env;

use anyhow::{Result, bail};

use crate::utils::trim_line;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_VOICE: &str = "Kore";

/// Connection settings for the generation service.
///
/// Built once at startup and owned by the gateway afterwards.
#[derive(Clone)]
pub struct GatewayConfig {
    api_key: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub speech_model: String,
    pub voice: String,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            speech_model: DEFAULT_SPEECH_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let value = env::var(API_KEY_ENV).ok();
        Self::from_key_value(value.as_deref())
    }

    fn from_key_value(value: Option<&str>) -> Result<Self> {
        let Some(key) = value.and_then(trim_line) else {
            bail!(
                "No API key provided. Set {} to enable generated content.",
                API_KEY_ENV
            );
        };
        Ok(Self::new(key))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_speech_model(mut self, model: impl Into<String>) -> Self {
        self.speech_model = model.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("speech_model", &self.speech_model)
            .field("voice", &self.voice)
            .finish()
    }
}
