use crate::error::Result;
use crate::utils::trim_line;

use super::client::GenerationService;
use super::wire::{Blob, GenerateContentRequest, GenerateContentResponse};

/// Sends `request` and returns the answer text, trimmed.
///
/// `Ok(None)` means the call succeeded but carried no usable text.
pub async fn request_text(
    service: &impl GenerationService,
    model: &str,
    request: &GenerateContentRequest,
) -> Result<Option<String>> {
    let response = service.generate(model, request).await?;
    Ok(response_text(&response))
}

/// Sends `request` and returns the first inline binary part.
pub async fn request_inline_data(
    service: &impl GenerationService,
    model: &str,
    request: &GenerateContentRequest,
) -> Result<Option<Blob>> {
    let response = service.generate(model, request).await?;
    Ok(first_inline_data(&response))
}

/// Text of the first candidate: every non-thought text part joined, then trimmed.
pub fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let joined: String = response
        .first_candidate_parts()
        .filter(|part| !part.is_thought())
        .filter_map(|part| part.text.as_deref())
        .collect();

    trim_line(&joined).map(str::to_string)
}

pub fn first_inline_data(response: &GenerateContentResponse) -> Option<Blob> {
    response
        .parts()
        .filter_map(|part| part.inline_data.as_ref())
        .find(|blob| !blob.data.is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn joins_text_parts_and_skips_thoughts() {
        let response = response(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "reasoning", "thought": true },
                { "text": "   " },
                { "text": "  answer \n" },
                { "text": "second" }
            ]}}]
        }));
        assert_eq!(response_text(&response).as_deref(), Some("answer \nsecond"));
    }

    #[test]
    fn split_reply_is_joined_in_order() {
        let response = response(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "A: ¡Hola!\n" },
                { "text": "B: ¿Qué tal?" }
            ]}}]
        }));
        assert_eq!(
            response_text(&response).as_deref(),
            Some("A: ¡Hola!\nB: ¿Qué tal?")
        );
    }

    #[test]
    fn only_first_candidate_is_read() {
        let response = response(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        }));
        assert_eq!(response_text(&response).as_deref(), Some("first"));
    }

    #[test]
    fn blank_parts_only_is_none() {
        let response = response(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "  " },
                { "text": "\n" },
                { "text": "hidden", "thought": true }
            ]}}]
        }));
        assert!(response_text(&response).is_none());
    }

    #[test]
    fn no_text_is_none() {
        assert!(response_text(&response(json!({}))).is_none());
        assert!(response_text(&response(json!({ "candidates": [{}] }))).is_none());
    }

    #[test]
    fn finds_inline_data_after_text() {
        let response = response(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Here is your picture" },
                { "inlineData": { "mimeType": "image/png", "data": "" } },
                { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
            ]}}]
        }));
        let blob = first_inline_data(&response).unwrap();
        assert_eq!(blob.mime_type, "image/png");
        assert_eq!(blob.data, "iVBORw0KGgo=");
    }

    #[test]
    fn missing_inline_data_is_none() {
        let response = response(json!({
            "candidates": [{ "content": { "parts": [{ "text": "sorry" }] } }]
        }));
        assert!(first_inline_data(&response).is_none());
    }
}
