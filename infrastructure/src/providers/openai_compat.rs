//! OpenAI-compatible chat-completions gateway
//!
//! Groq, OpenAI, vLLM, llama.cpp server and most hosted inference APIs
//! accept the same `/v1/chat/completions` request, so one adapter serves
//! every debate role.

use crate::config::FileProviderConfig;
use arena_application::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use arena_domain::Role;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// [`LlmGateway`] backed by an OpenAI-compatible HTTP endpoint
#[derive(Debug, Clone)]
pub struct OpenAiCompatGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OpenAiCompatGateway {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Build from the `[provider]` section, resolving the API key.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| GatewayError::MissingApiKey(config.api_key_env.clone()))?;

        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            ..Self::new(&config.base_url, api_key)
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// System message first, then prior context, then the new user text.
    fn build_body<'a>(&self, request: &'a CompletionRequest) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(request.context.len() + 2);
        messages.push(ChatMessage {
            role: "system",
            content: &request.system,
        });
        messages.extend(request.context.iter().map(|m| ChatMessage {
            role: m.role.as_str(),
            content: &m.content,
        }));
        messages.push(ChatMessage {
            role: Role::User.as_str(),
            content: &request.user_text,
        });

        ChatRequest {
            model: request.model.as_str(),
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    fn status_error(status: StatusCode, body: String) -> GatewayError {
        let detail = format!("Status: {}, Body: {}", status, body);
        match status {
            StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(detail),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GatewayError::Timeout,
            _ => GatewayError::RequestFailed(detail),
        }
    }

    /// First choice's content; a missing or null content is an empty answer.
    fn content_of(response: ChatResponse) -> Result<String, GatewayError> {
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| GatewayError::InvalidResponse("response has no choices".to_string()))
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let start = Instant::now();
        let body = self.build_body(request);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let content = Self::content_of(parsed)?;
        debug!(
            "{} answered {} bytes in {}ms",
            request.model,
            content.len(),
            start.elapsed().as_millis()
        );
        Ok(content)
    }
}
