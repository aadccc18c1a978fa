use crate::error::{GatewayError, Result};

use super::client::GenerationService;
use super::config::GatewayConfig;
use super::response::request_inline_data;
use super::wire::{GenerateContentRequest, GenerationConfig, SpeechConfig};

/// Reads `text` aloud and returns the audio as bare base64.
///
/// The audio format is whatever the speech model produces. Failures are
/// logged and reported as `None`.
pub async fn request_speech(
    service: &impl GenerationService,
    config: &GatewayConfig,
    text: &str,
) -> Option<String> {
    if text.trim().is_empty() {
        tracing::debug!("skipping speech generation for blank text");
        return None;
    }

    match try_request_speech(service, config, text).await {
        Ok(audio) => Some(audio),
        Err(err) => {
            tracing::warn!(error = %err, "speech generation failed, continuing without audio");
            None
        }
    }
}

async fn try_request_speech(
    service: &impl GenerationService,
    config: &GatewayConfig,
    text: &str,
) -> Result<String> {
    let request = GenerateContentRequest::from_prompt(text.trim()).with_config(GenerationConfig {
        response_modalities: Some(vec!["AUDIO".to_string()]),
        speech_config: Some(SpeechConfig::prebuilt(config.voice.as_str())),
        ..GenerationConfig::default()
    });

    let blob = request_inline_data(service, &config.speech_model, &request)
        .await?
        .ok_or(GatewayError::MissingInlineData("audio"))?;

    Ok(blob.data)
}
