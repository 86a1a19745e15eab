//! Provider abstraction and per-family wire mappings
//!
//! The [`Provider`] trait is the seam between the unified types and the HTTP
//! transport that implements them; this crate ships the content mappings for
//! the OpenAI and Anthropic families but no transport.

pub mod anthropic;
pub mod openai;

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::core::types::chat::{ChatChunk, ChatRequest, ChatResponse};
use crate::core::types::errors::{ClientError, Result};
use crate::core::types::model::ModelInfo;

/// Provider type enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ProviderType {
    OpenAI,
    Anthropic,
    Custom(String),
}

impl From<&str> for ProviderType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "openai" => ProviderType::OpenAI,
            "anthropic" => ProviderType::Anthropic,
            other => ProviderType::Custom(other.to_string()),
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::OpenAI => write!(f, "openai"),
            ProviderType::Anthropic => write!(f, "anthropic"),
            ProviderType::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Split a `provider/model` string into its provider and bare model name.
///
/// Models without a prefix default to OpenAI, mirroring the common
/// `gpt-*`-style default routing.
pub fn split_model_name(model: &str) -> (ProviderType, &str) {
    match model.split_once('/') {
        Some((provider, rest)) => (ProviderType::from(provider), rest),
        None => (ProviderType::OpenAI, model),
    }
}

/// Streaming chat response
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<ChatChunk>> + Send>>;

/// Unified interface implemented by provider transports.
///
/// Implementations own HTTP, auth, and retry concerns; they consume the
/// unified request types and the per-family content mappings from this crate.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider family
    fn provider_type(&self) -> ProviderType;

    /// Execute a chat completion request
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Execute a streaming chat completion request.
    ///
    /// Default implementation reports streaming as unsupported.
    async fn chat_stream(&self, _request: ChatRequest) -> Result<ChatStream> {
        Err(ClientError::NotSupported("streaming".to_string()))
    }

    /// List the models this provider can serve
    async fn list_models(&self) -> Result<Vec<ModelInfo>>;
}
