use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{GatewayError, Result};

use super::client::GenerationService;
use super::config::GatewayConfig;
use super::response::request_text;
use super::wire::{GenerateContentRequest, GenerationConfig};

const EXAMPLE_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionResult {
    pub definition: String,
    pub examples: Vec<Example>,
    pub usage_note: String,
}

/// An example sentence in the target language with its native translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub target: String,
    pub native: String,
}

pub async fn request_definition(
    service: &impl GenerationService,
    config: &GatewayConfig,
    term: &str,
    native_lang: &str,
    target_lang: &str,
) -> Result<DefinitionResult> {
    let request = GenerateContentRequest::from_prompt(definition_prompt(
        term,
        native_lang,
        target_lang,
    ))
    .with_config(GenerationConfig {
        temperature: Some(0.0),
        response_mime_type: Some("application/json".to_string()),
        response_schema: Some(definition_schema()),
        ..GenerationConfig::default()
    });

    let text = request_text(service, &config.text_model, &request)
        .await?
        .ok_or(GatewayError::GenerationFailure)?;

    parse_definition(&text)
}

fn definition_prompt(term: &str, native_lang: &str, target_lang: &str) -> String {
    format!(
        "You are a {target_lang} teacher helping a learner whose native language \
         is {native_lang}.\n\
         Explain the {target_lang} term \"{term}\".\n\
         - definition: a short, clear definition written in {native_lang}.\n\
         - examples: {EXAMPLE_COUNT} natural example sentences using the term. \
         Put the {target_lang} sentence in \"target\" and its {native_lang} \
         translation in \"native\".\n\
         - usageNote: one or two sentences in {native_lang} about register, grammar \
         or common pitfalls."
    )
}

/// Response schema in the service's OpenAPI subset.
pub fn definition_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "definition": { "type": "STRING" },
            "examples": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "target": { "type": "STRING" },
                        "native": { "type": "STRING" }
                    },
                    "required": ["target", "native"]
                }
            },
            "usageNote": { "type": "STRING" }
        },
        "required": ["definition", "examples", "usageNote"],
        "propertyOrdering": ["definition", "examples", "usageNote"]
    })
}

/// Decodes model output into a `DefinitionResult` and rejects empty content.
pub fn parse_definition(text: &str) -> Result<DefinitionResult> {
    let result: DefinitionResult = serde_json::from_str(strip_code_fence(text))?;
    validate(&result)?;
    Ok(result)
}

// Some models wrap JSON in a markdown fence even in JSON mode
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn validate(result: &DefinitionResult) -> Result<()> {
    if result.definition.trim().is_empty() {
        return Err(invalid("definition is empty"));
    }
    if result.examples.is_empty() {
        return Err(invalid("no examples were returned"));
    }
    for (idx, example) in result.examples.iter().enumerate() {
        if example.target.trim().is_empty() {
            return Err(invalid(format!(
                "example {} has an empty target sentence",
                idx + 1
            )));
        }
        if example.native.trim().is_empty() {
            return Err(invalid(format!(
                "example {} has an empty translation",
                idx + 1
            )));
        }
    }
    Ok(())
}

fn invalid(reason: impl Into<String>) -> GatewayError {
    GatewayError::InvalidDefinition(reason.into())
}
