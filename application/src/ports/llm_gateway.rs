//! LLM Gateway port
//!
//! Defines the single capability the debate core needs from its
//! environment: one chat completion against a hosted model.

use arena_domain::{Message, Model};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// Transport, auth and rate-limit details are opaque to the use cases;
/// they only propagate them.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One completion call: system instruction, prior context, new user text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: Model,
    pub system: String,
    /// Prior messages, oldest first
    pub context: Vec<Message>,
    pub user_text: String,
}

impl CompletionRequest {
    pub fn new(model: Model, system: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            model,
            system: system.into(),
            context: Vec::new(),
            user_text: user_text.into(),
        }
    }

    pub fn with_context(mut self, context: Vec<Message>) -> Self {
        self.context = context;
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to model backends.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Run one completion and return the generated text.
    ///
    /// An empty string means the backend answered with no content; callers
    /// decide whether that is an error.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
