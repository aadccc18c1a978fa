use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;
use crate::utils::truncate_chars;

use super::client::GenerationService;
use super::config::GatewayConfig;
use super::response::request_text;
use super::wire::{GenerateContentRequest, GenerationConfig};

pub const QUICK_ANSWER_FALLBACK: &str = "Could not generate an answer right now.";
pub const MAX_QUICK_ANSWER_CHARS: usize = 500;
const QUICK_ANSWER_MAX_TOKENS: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    /// How a native speaker would naturally use the term.
    Natural,
    /// A common learner mistake with the term.
    Mistake,
    /// A fun fact about the term.
    FunFact,
}

impl AnswerKind {
    pub const ALL: [AnswerKind; 3] = [
        AnswerKind::Natural,
        AnswerKind::Mistake,
        AnswerKind::FunFact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKind::Natural => "natural",
            AnswerKind::Mistake => "mistake",
            AnswerKind::FunFact => "funfact",
        }
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown answer kind `{0}` (expected natural, mistake or funfact)")]
pub struct UnknownAnswerKind(pub String);

impl FromStr for AnswerKind {
    type Err = UnknownAnswerKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        AnswerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownAnswerKind(s.to_string()))
    }
}

/// Answers a short question about `term`.
///
/// Service errors propagate; an empty answer becomes [`QUICK_ANSWER_FALLBACK`].
pub async fn request_quick_answer(
    service: &impl GenerationService,
    config: &GatewayConfig,
    term: &str,
    kind: AnswerKind,
    native_lang: &str,
    target_lang: &str,
) -> Result<String> {
    let request = GenerateContentRequest::from_prompt(quick_answer_prompt(
        term,
        kind,
        native_lang,
        target_lang,
    ))
    .with_config(GenerationConfig {
        temperature: Some(0.0),
        max_output_tokens: Some(QUICK_ANSWER_MAX_TOKENS),
        ..GenerationConfig::default()
    });

    let answer = match request_text(service, &config.text_model, &request).await? {
        Some(text) => truncate_chars(&text, MAX_QUICK_ANSWER_CHARS),
        None => {
            tracing::debug!(%kind, "quick answer returned no text, using fallback");
            QUICK_ANSWER_FALLBACK.to_string()
        }
    };
    Ok(answer)
}

fn quick_answer_prompt(
    term: &str,
    kind: AnswerKind,
    native_lang: &str,
    target_lang: &str,
) -> String {
    let question = match kind {
        AnswerKind::Natural => format!(
            "How would a native {target_lang} speaker naturally use \"{term}\" in everyday speech? \
             Give one short example in {target_lang}."
        ),
        AnswerKind::Mistake => format!(
            "What is the most common mistake {native_lang} speakers make when using \
             the {target_lang} term \"{term}\", and how do they avoid it?"
        ),
        AnswerKind::FunFact => format!(
            "Share one surprising fun fact about the {target_lang} term \"{term}\", \
             such as its origin or a cultural detail."
        ),
    };

    format!(
        "{question}\nAnswer in {native_lang}, in at most two short sentences, with no preamble."
    )
}
