pub mod client;
pub mod config;
pub mod definition;
pub mod image;
pub mod quick_answer;
pub mod response;
pub mod speech;
pub mod story;
pub mod wire;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{GeminiClient, GenerationService};
pub use config::{API_KEY_ENV, GatewayConfig};
pub use definition::{DefinitionResult, Example, request_definition};
pub use image::request_image;
pub use quick_answer::{
    AnswerKind, QUICK_ANSWER_FALLBACK, UnknownAnswerKind, request_quick_answer,
};
pub use speech::request_speech;
pub use story::{STORY_FALLBACK, request_story};
