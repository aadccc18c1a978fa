use crate::error::{GatewayError, Result};
use crate::seed::term_seed;

use super::client::GenerationService;
use super::config::GatewayConfig;
use super::response::request_inline_data;
use super::wire::{GenerateContentRequest, GenerationConfig};

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Illustrates `term` and returns it as a PNG data URI.
///
/// Any failure is logged and reported as `None` so callers can simply omit the image.
pub async fn request_image(
    service: &impl GenerationService,
    config: &GatewayConfig,
    term: &str,
    target_lang: &str,
) -> Option<String> {
    match try_request_image(service, config, term, target_lang).await {
        Ok(uri) => Some(uri),
        Err(err) => {
            tracing::warn!(
                error = %err,
                term,
                "image generation failed, continuing without an image"
            );
            None
        }
    }
}

async fn try_request_image(
    service: &impl GenerationService,
    config: &GatewayConfig,
    term: &str,
    target_lang: &str,
) -> Result<String> {
    let request = GenerateContentRequest::from_prompt(image_prompt(term, target_lang))
        .with_config(GenerationConfig {
            seed: Some(term_seed(term)),
            response_modalities: Some(vec!["IMAGE".to_string()]),
            ..GenerationConfig::default()
        });

    let blob = request_inline_data(service, &config.image_model, &request)
        .await?
        .ok_or(GatewayError::MissingInlineData("image"))?;

    Ok(format!("{DATA_URI_PREFIX}{}", blob.data))
}

fn image_prompt(term: &str, target_lang: &str) -> String {
    format!(
        "Create a simple, friendly flashcard illustration that represents the \
         {target_lang} word \"{term}\". Use a clean background and bright, flat colors. \
         Do not include any text or letters in the image."
    )
}
