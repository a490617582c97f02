// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Chat-completion boundary.
//!
//! Everything above this module talks to a [`CompletionService`]; the only
//! production implementation is [`HttpCompletionClient`], which speaks the
//! OpenAI-compatible `/chat/completions` protocol (Groq by default).

use crate::config::Settings;
use crate::error::ServiceError;
use crate::utils::http_client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Model identifiers offered to the user. The first one is the default.
pub const SUPPORTED_MODELS: [&str; 3] = [
    "llama-3.1-8b-instant",
    "llama-3.3-70b-versatile",
    "openai/gpt-oss-120b",
];

pub const DEFAULT_MODEL: &str = SUPPORTED_MODELS[0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A synchronous chat-completion backend.
///
/// `model` is passed through untouched; implementations must not interpret it.
pub trait CompletionService {
    fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ServiceError>;
}

impl<T: CompletionService + ?Sized> CompletionService for &T {
    fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ServiceError> {
        (**self).complete(model, messages)
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Blocking client for an OpenAI-compatible chat-completions endpoint.
pub struct HttpCompletionClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl HttpCompletionClient {
    pub fn new(settings: &Settings) -> Result<Self, ServiceError> {
        Ok(Self {
            http: http_client()?,
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            api_key: settings.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionService for HttpCompletionClient {
    fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ServiceError> {
        debug!(model, messages = messages.len(), "sending completion request");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest { model, messages })
            .send()
            .inspect_err(|e| warn!(error = %e, "completion request failed"))?;

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "completion service rejected request");
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let content = extract_content(&body)?;
        info!(model, chars = content.len(), "completion received");
        Ok(content)
    }
}

/// Pulls `choices[0].message.content` out of a response body.
pub fn extract_content(body: &str) -> Result<String, ServiceError> {
    let parsed: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| ServiceError::MalformedResponse("response had no message content".into()))
}
