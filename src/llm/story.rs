use crate::error::Result;

use super::client::GenerationService;
use super::config::GatewayConfig;
use super::response::request_text;
use super::wire::GenerateContentRequest;

pub const STORY_FALLBACK: &str = "Could not generate dialogue.";

/// Writes a short dialogue that practices `words`.
///
/// Service errors propagate; an empty answer becomes [`STORY_FALLBACK`].
pub async fn request_story(
    service: &impl GenerationService,
    config: &GatewayConfig,
    words: &[String],
    native_lang: &str,
    target_lang: &str,
) -> Result<String> {
    let request =
        GenerateContentRequest::from_prompt(story_prompt(words, native_lang, target_lang));

    let text = request_text(service, &config.text_model, &request).await?;
    Ok(text.unwrap_or_else(|| {
        tracing::debug!("story generation returned no text, using fallback");
        STORY_FALLBACK.to_string()
    }))
}

fn story_prompt(words: &[String], native_lang: &str, target_lang: &str) -> String {
    let words: Vec<&str> = words
        .iter()
        .map(|word| word.trim())
        .filter(|word| !word.is_empty())
        .collect();

    let vocabulary = if words.is_empty() {
        "Use simple, everyday vocabulary.".to_string()
    } else {
        format!("Use each of these words at least once: {}.", words.join(", "))
    };

    format!(
        "Write a short, natural dialogue in {target_lang} between two people (A and B), \
         six to eight lines long.\n\
         {vocabulary}\n\
         After each line, add its {native_lang} translation in parentheses on the next line.\n\
         Return only the dialogue."
    )
}
