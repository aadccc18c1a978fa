//! In-memory `GenerationService` used by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use futures::future::BoxFuture;
use serde_json::json;

use crate::error::{GatewayError, Result};

use super::client::GenerationService;
use super::wire::{GenerateContentRequest, GenerateContentResponse};

pub enum Reply {
    Json(serde_json::Value),
    Fail { status: u16, message: &'static str },
}

/// Replays queued replies in order and records every request it receives.
#[derive(Default)]
pub struct ScriptedService {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<(String, GenerateContentRequest)>>,
}

impl ScriptedService {
    pub fn replying(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::default(),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::replying([Reply::Json(text_response(text))])
    }

    pub fn failing(status: u16, message: &'static str) -> Self {
        Self::replying([Reply::Fail { status, message }])
    }

    pub fn calls(&self) -> Vec<(String, GenerateContentRequest)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn only_call(&self) -> (String, GenerateContentRequest) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call");
        calls.into_iter().next().unwrap()
    }
}

impl GenerationService for ScriptedService {
    fn generate<'a>(
        &'a self,
        model: &'a str,
        request: &'a GenerateContentRequest,
    ) -> BoxFuture<'a, Result<GenerateContentResponse>> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));
        let reply = self.replies.lock().unwrap().pop_front();

        Box::pin(async move {
            match reply {
                Some(Reply::Json(value)) => {
                    serde_json::from_value(value).map_err(GatewayError::MalformedResponse)
                }
                Some(Reply::Fail { status, message }) => Err(GatewayError::Api {
                    status,
                    message: message.to_string(),
                }),
                None => panic!("no scripted reply left"),
            }
        })
    }
}

pub fn text_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
}

/// A single candidate whose answer is split across several text parts.
pub fn split_text_response(parts: &[&str]) -> serde_json::Value {
    let parts: Vec<_> = parts.iter().map(|text| json!({ "text": text })).collect();
    json!({
        "candidates": [{ "content": { "role": "model", "parts": parts } }]
    })
}

pub fn inline_response(mime_type: &str, data: &str) -> serde_json::Value {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [
            { "inlineData": { "mimeType": mime_type, "data": data } }
        ]}}]
    })
}
